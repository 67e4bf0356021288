//! Emission ordering for resolved rules.

use crate::rule::SubstitutionRule;

/// Order rules by descending specificity for emission.
///
/// The substitution engine tries rules in declaration order within a lookup,
/// so a substring rule declared before its container would shadow the longer
/// match. The sort is stable: rules of equal specificity keep their word-list
/// order, which makes output deterministic for a given input.
pub fn sequence_by_specificity(mut rules: Vec<SubstitutionRule>) -> Vec<SubstitutionRule> {
    rules.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
    rules
}

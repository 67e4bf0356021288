//! Substitution rules and the deduplicating rule collection.

use std::borrow::Borrow;
use std::collections::HashSet;

use crate::error::RuleError;

/// Word-boundary guard on one side of a rule's pattern.
///
/// A guard means "do not substitute when a letter-class glyph is adjacent on
/// this side", which restricts the rule to whole-word occurrences. The class
/// name is emitted without decoration; the feature syntax adds the `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryGuard {
    class: String,
}

impl BoundaryGuard {
    /// Name of the glyph class the guard excludes, e.g. `LETTER`.
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// A single ligature substitution: replace `pattern` with `target_glyph`.
///
/// Guards start out present on both sides when boundary guarding is enabled
/// and are only ever *cleared* afterwards, by conflict resolution. Pattern
/// and specificity never change after synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    target_glyph: String,
    pattern: Vec<String>,
    specificity: usize,
    left_guard: Option<BoundaryGuard>,
    right_guard: Option<BoundaryGuard>,
}

impl SubstitutionRule {
    /// Synthesize a rule for `pattern`, guarded on both sides when
    /// `boundary_guards` is set.
    ///
    /// # Errors
    /// [`RuleError::EmptyWord`] when the pattern has no glyphs; an empty
    /// match sequence would be meaningless in the feature output.
    pub fn synthesize(
        pattern: Vec<String>,
        target_glyph: impl Into<String>,
        boundary_guards: bool,
        letter_class: &str,
    ) -> Result<Self, RuleError> {
        let target_glyph = target_glyph.into();
        if pattern.is_empty() {
            return Err(RuleError::EmptyWord { name: target_glyph });
        }
        let guard = || {
            Some(BoundaryGuard {
                class: letter_class.to_string(),
            })
        };
        Ok(Self {
            specificity: pattern.len(),
            left_guard: if boundary_guards { guard() } else { None },
            right_guard: if boundary_guards { guard() } else { None },
            pattern,
            target_glyph,
        })
    }

    /// Glyph the pattern is replaced with.
    pub fn target_glyph(&self) -> &str {
        &self.target_glyph
    }

    /// Glyph sequence this rule matches.
    pub fn pattern(&self) -> &[String] {
        &self.pattern
    }

    /// Match strength: the pattern length. Longer patterns must be tried
    /// before their substrings.
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    pub fn left_guard(&self) -> Option<&BoundaryGuard> {
        self.left_guard.as_ref()
    }

    pub fn right_guard(&self) -> Option<&BoundaryGuard> {
        self.right_guard.as_ref()
    }

    /// Whether any boundary guard survives on this rule.
    pub fn is_guarded(&self) -> bool {
        self.left_guard.is_some() || self.right_guard.is_some()
    }

    pub(crate) fn clear_left_guard(&mut self) {
        self.left_guard = None;
    }

    pub(crate) fn clear_right_guard(&mut self) {
        self.right_guard = None;
    }
}

/// Rule collection that rejects duplicate patterns.
///
/// Two words mapping to the same pattern would produce contradictory
/// substitutions; the collection keeps the first and drops the rest, so no
/// composite ends up orphaned by a later rule silently replacing its rule.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
    seen: HashSet<Vec<String>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a rule with this exact pattern is already present.
    pub fn contains_pattern<P>(&self, pattern: &P) -> bool
    where
        P: Borrow<[String]> + ?Sized,
    {
        self.seen.contains(pattern.borrow())
    }

    /// Insert `rule`, keeping the first rule on pattern collision.
    ///
    /// Returns `true` when the rule was added. Call this before composing
    /// the target glyph, or check [`Self::contains_pattern`] first, so a
    /// rejected rule does not leave an orphan composite behind.
    pub fn insert(&mut self, rule: SubstitutionRule) -> bool {
        if self.seen.contains(rule.pattern()) {
            log::warn!(
                "duplicate pattern {:?} for '{}', keeping the first rule",
                rule.pattern(),
                rule.target_glyph()
            );
            return false;
        }
        self.seen.insert(rule.pattern().to_vec());
        self.rules.push(rule);
        true
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in insertion order.
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut [SubstitutionRule] {
        &mut self.rules
    }

    pub fn into_rules(self) -> Vec<SubstitutionRule> {
        self.rules
    }
}

//! Guard conflict resolution across a whole rule set.
//!
//! A guard on rule A is unsound if some other rule B's pattern contains A's
//! pattern with letters adjacent on the guarded side: inside a match of B
//! those letters are exactly what the guard forbids, so A could never fire
//! there and B's longer match must win unimpeded. Resolution weakens guards;
//! it never adds one and never touches patterns.

use crate::rule::SubstitutionRule;

/// Clear every guard contradicted by a containing rule.
///
/// All-pairs comparison: for each guarded rule, look at every other rule
/// whose pattern contains it. Containment anywhere but as a suffix puts a
/// letter after the occurrence, so the right guard goes; containment
/// anywhere but as a prefix puts a letter before it, so the left guard goes.
/// Quadratic in the number of rules, which stays small by construction.
pub fn resolve_guard_conflicts(rules: &mut [SubstitutionRule]) {
    for a in 0..rules.len() {
        for b in 0..rules.len() {
            if a == b || !rules[a].is_guarded() {
                continue;
            }
            let (contained, keeps_prefix, keeps_suffix) = {
                let pa = rules[a].pattern();
                let pb = rules[b].pattern();
                (
                    contains_run(pb, pa),
                    pb.starts_with(pa),
                    pb.ends_with(pa),
                )
            };
            if !contained {
                continue;
            }
            if !keeps_suffix {
                rules[a].clear_right_guard();
            }
            if !keeps_prefix {
                rules[a].clear_left_guard();
            }
        }
    }
}

/// Whether `needle` occurs as a contiguous run of whole glyph names in
/// `haystack`. Token-wise, so `a` inside `aacute` is not a match.
fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(word: &str, index: usize) -> SubstitutionRule {
        let pattern: Vec<String> = word.chars().map(|c| c.to_string()).collect();
        SubstitutionRule::synthesize(pattern, format!("liga_{index}_lower"), true, "LETTER")
            .unwrap()
    }

    fn guards(rule: &SubstitutionRule) -> (bool, bool) {
        (rule.left_guard().is_some(), rule.right_guard().is_some())
    }

    #[test]
    fn test_interior_containment_clears_both_guards() {
        // "an" sits strictly inside "band": letters on both sides.
        let mut rules = vec![rule("an", 0), rule("band", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (false, false));
        assert_eq!(guards(&rules[1]), (true, true));
    }

    #[test]
    fn test_prefix_containment_clears_only_right_guard() {
        // "cat" is a prefix of "catalog": only a following letter exists.
        let mut rules = vec![rule("cat", 0), rule("catalog", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (true, false));
        assert_eq!(guards(&rules[1]), (true, true));
    }

    #[test]
    fn test_suffix_containment_clears_only_left_guard() {
        let mut rules = vec![rule("log", 0), rule("catalog", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (false, true));
        assert_eq!(guards(&rules[1]), (true, true));
    }

    #[test]
    fn test_prefix_and_suffix_of_different_rules() {
        // Prefix of one container and suffix of another: both guards go.
        let mut rules = vec![rule("ana", 0), rule("anagrama", 1), rule("manzana", 2)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (false, false));
        assert_eq!(guards(&rules[1]), (true, true));
        assert_eq!(guards(&rules[2]), (true, true));
    }

    #[test]
    fn test_unrelated_rules_keep_guards() {
        let mut rules = vec![rule("cat", 0), rule("dog", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (true, true));
        assert_eq!(guards(&rules[1]), (true, true));
    }

    #[test]
    fn test_overlap_without_containment_keeps_guards() {
        // "ban" and "and" overlap but neither contains the other.
        let mut rules = vec![rule("ban", 0), rule("and", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (true, true));
        assert_eq!(guards(&rules[1]), (true, true));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut rules = vec![rule("an", 0), rule("band", 1), rule("cat", 2), rule("catalog", 3)];
        resolve_guard_conflicts(&mut rules);
        let after_first: Vec<_> = rules.iter().map(guards).collect();
        resolve_guard_conflicts(&mut rules);
        let after_second: Vec<_> = rules.iter().map(guards).collect();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_resolution_never_restores_guards() {
        let mut rules = vec![rule("an", 0), rule("band", 1)];
        rules[1].clear_left_guard();
        resolve_guard_conflicts(&mut rules);
        // Rule 1 is contained in nothing; its cleared guard stays cleared.
        assert_eq!(guards(&rules[1]), (false, true));
    }

    #[test]
    fn test_unguarded_rules_untouched() {
        let pattern: Vec<String> = "an".chars().map(|c| c.to_string()).collect();
        let unguarded =
            SubstitutionRule::synthesize(pattern, "liga_0_lower", false, "LETTER").unwrap();
        let mut rules = vec![unguarded, rule("band", 1)];
        resolve_guard_conflicts(&mut rules);
        assert_eq!(guards(&rules[0]), (false, false));
    }

    #[test]
    fn test_token_containment_is_whole_glyph() {
        // Glyph-name tokens must match whole: ["a"] is not inside ["aacute"].
        let a: Vec<String> = vec!["a".into()];
        let aacute: Vec<String> = vec!["aacute".into()];
        assert!(!contains_run(&aacute, &a));
        let maana: Vec<String> =
            vec!["m".into(), "a".into(), "ntilde".into(), "a".into(), "n".into(), "a".into()];
        let ana: Vec<String> = vec!["a".into(), "n".into(), "a".into()];
        assert!(contains_run(&maana, &ana));
    }

    #[test]
    fn test_empty_needle_never_contained() {
        let hay: Vec<String> = vec!["a".into()];
        assert!(!contains_run(&hay, &[]));
    }
}

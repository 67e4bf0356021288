//! End-to-end tests for the rule engine: words in, ordered resolved rules
//! and composites out, using the embedded glyph table.

use lexliga_rules::{
    CaseVariant, GlyphTable, RuleSet, SubstitutionRule, compose, composite_name,
    resolve_guard_conflicts, sequence_by_specificity,
};

/// Run the engine over `(from, to)` word pairs the way the generator does:
/// map, dedup, synthesize both case variants, resolve, sequence.
fn engine(
    pairs: &[(&str, &str)],
    table: &GlyphTable,
    capitalized: bool,
    boundaries: bool,
) -> Vec<SubstitutionRule> {
    let mut set = RuleSet::new();
    for (index, (from, to)) in pairs.iter().enumerate() {
        if from == to {
            continue;
        }
        let mut variants = vec![CaseVariant::Lower];
        if capitalized {
            variants.push(CaseVariant::Capitalized);
        }
        for case in variants {
            let pattern = table.map_word(from, case);
            if set.contains_pattern(pattern.as_slice()) {
                continue;
            }
            let name = composite_name(index, case);
            compose(to, case, table, 0, name.as_str()).unwrap();
            let rule =
                SubstitutionRule::synthesize(pattern, name, boundaries, "LETTER").unwrap();
            assert!(set.insert(rule));
        }
    }
    let mut rules = set.into_rules();
    resolve_guard_conflicts(&mut rules);
    sequence_by_specificity(rules)
}

#[test]
fn test_engine_produces_both_case_variants() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("cat", "gato"), ("dog", "perro")], &table, true, true);
    assert_eq!(rules.len(), 4);
    let targets: Vec<&str> = rules.iter().map(|r| r.target_glyph()).collect();
    assert!(targets.contains(&"liga_0_lower"));
    assert!(targets.contains(&"liga_0_capitalized"));
    assert!(targets.contains(&"liga_1_lower"));
    assert!(targets.contains(&"liga_1_capitalized"));
}

#[test]
fn test_engine_lowercase_only() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("cat", "gato")], &table, false, true);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].target_glyph(), "liga_0_lower");
}

#[test]
fn test_engine_skips_identical_pairs() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("taxi", "taxi"), ("cat", "gato")], &table, false, true);
    assert_eq!(rules.len(), 1);
    // Skipped pairs still consume their index, leaving a gap in the names.
    assert_eq!(rules[0].target_glyph(), "liga_1_lower");
}

#[test]
fn test_engine_resolves_containment_before_sequencing() {
    let table = GlyphTable::embedded();
    let rules = engine(
        &[("an", "uno"), ("band", "banda"), ("catalog", "catalogo"), ("cat", "gato")],
        &table,
        false,
        true,
    );

    // Longest first; ties keep word-list order.
    let lengths: Vec<usize> = rules.iter().map(|r| r.specificity()).collect();
    assert_eq!(lengths, [7, 4, 3, 2]);

    let by_target = |t: &str| rules.iter().find(|r| r.target_glyph() == t).unwrap();
    // "an" inside "band": both guards cleared.
    let an = by_target("liga_0_lower");
    assert!(an.left_guard().is_none());
    assert!(an.right_guard().is_none());
    // "cat" prefixes "catalog": only the right guard cleared.
    let cat = by_target("liga_3_lower");
    assert!(cat.left_guard().is_some());
    assert!(cat.right_guard().is_none());
    // Containers stay fully guarded.
    let catalog = by_target("liga_2_lower");
    assert!(catalog.left_guard().is_some());
    assert!(catalog.right_guard().is_some());
}

#[test]
fn test_engine_boundaries_disabled_yields_plain_rules() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("an", "uno"), ("band", "banda")], &table, false, false);
    assert!(rules.iter().all(|r| !r.is_guarded()));
}

#[test]
fn test_engine_duplicate_from_words_keep_first() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("cat", "gato"), ("cat", "felino")], &table, false, true);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].target_glyph(), "liga_0_lower");
}

#[test]
fn test_engine_accented_words_use_glyph_names() {
    let table = GlyphTable::embedded();
    let rules = engine(&[("mañana", "morning")], &table, true, true);
    let lower = rules
        .iter()
        .find(|r| r.target_glyph() == "liga_0_lower")
        .unwrap();
    assert_eq!(lower.pattern(), ["m", "a", "ntilde", "a", "n", "a"]);
    let cap = rules
        .iter()
        .find(|r| r.target_glyph() == "liga_0_capitalized")
        .unwrap();
    assert_eq!(cap.pattern(), ["M", "a", "ntilde", "a", "n", "a"]);
}

#[test]
fn test_composites_line_up_with_embedded_widths() {
    let table = GlyphTable::embedded();
    let composite = compose("sol", CaseVariant::Lower, &table, 0, "liga_0_lower").unwrap();
    let mut expected = 0;
    for placement in composite.components() {
        assert_eq!(placement.x_offset, expected);
        expected += table.width_of(&placement.glyph).unwrap();
    }
    assert_eq!(composite.total_width(), expected);
}

#[test]
fn test_case_variants_share_pattern_only_when_identical() {
    // A from-word with no letters that change under capitalization would
    // collide; the set keeps the first variant.
    let table = GlyphTable::from_json(r#"{"widths": {"7": 600}}"#).unwrap();
    let mut set = RuleSet::new();
    for case in [CaseVariant::Lower, CaseVariant::Capitalized] {
        let pattern = table.map_word("7", case);
        if set.contains_pattern(pattern.as_slice()) {
            continue;
        }
        let rule = SubstitutionRule::synthesize(pattern, composite_name(0, case), true, "LETTER")
            .unwrap();
        set.insert(rule);
    }
    assert_eq!(set.len(), 1);
    assert_eq!(set.rules()[0].target_glyph(), "liga_0_lower");
}

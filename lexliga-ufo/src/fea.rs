//! Feature-file rendering for substitution rules.
//!
//! A rule with no surviving guards renders as a plain ligature substitution.
//! A guarded rule renders in contextual form: the pattern glyphs are marked
//! with `'`, preceded by one `ignore sub` statement per surviving guard so
//! the substitution skips occurrences with a letter-class glyph adjacent on
//! that side.

use lexliga_rules::SubstitutionRule;

/// Render one rule as its feature-file statement block.
///
/// Guarded form, both guards surviving:
/// ```text
/// ignore sub @LETTER c' a' t';
/// ignore sub c' a' t' @LETTER;
/// sub c' a' t' by liga_0_lower;
/// ```
/// Unguarded form: `sub c a t by liga_0_lower;`
pub fn render_rule(rule: &SubstitutionRule) -> String {
    if !rule.is_guarded() {
        return format!("sub {} by {};", rule.pattern().join(" "), rule.target_glyph());
    }

    let marked = rule
        .pattern()
        .iter()
        .map(|glyph| format!("{glyph}'"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut block = String::new();
    if let Some(guard) = rule.left_guard() {
        block.push_str(&format!("ignore sub @{} {};\n", guard.class(), marked));
    }
    if let Some(guard) = rule.right_guard() {
        block.push_str(&format!("ignore sub {} @{};\n", marked, guard.class()));
    }
    block.push_str(&format!("sub {} by {};", marked, rule.target_glyph()));
    block
}

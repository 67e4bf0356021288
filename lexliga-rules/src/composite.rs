//! Glyph composition: turning a word into a composite glyph descriptor.
//!
//! A composite places existing glyphs side by side at cumulative x-offsets;
//! the emission adapter later serializes it into a `.glif` outline made of
//! `<component>` references.

use crate::error::RuleError;
use crate::glyphs::{CaseVariant, GlyphTable};

/// One component of a composite: an existing glyph placed at an x-offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPlacement {
    /// Identifier of the existing glyph being referenced.
    pub glyph: String,
    /// Horizontal offset from the composite's origin, in font units.
    pub x_offset: u32,
}

/// A synthesized glyph built from existing glyphs glued left to right.
///
/// Created once per word variant and immutable afterwards. Offsets are
/// monotonically non-decreasing and `total_width` equals the last
/// component's offset plus its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphComposite {
    name: String,
    components: Vec<GlyphPlacement>,
    total_width: u32,
}

impl GlyphComposite {
    /// Unique name of the generated glyph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Components in left-to-right visual order.
    pub fn components(&self) -> &[GlyphPlacement] {
        &self.components
    }

    /// Advance width of the whole composite, in font units.
    pub fn total_width(&self) -> u32 {
        self.total_width
    }
}

/// Name of the composite generated for a word pair and case variant.
///
/// Pair indices count consumed word pairs, so skipped pairs leave gaps in
/// the numbering.
pub fn composite_name(pair_index: usize, case: CaseVariant) -> String {
    format!("liga_{}_{}", pair_index, case.tag())
}

/// Build the composite for `word`.
///
/// Each letter maps to a glyph through the table, components accumulate at
/// cumulative offsets, and `leading` units of spacing are inserted between
/// components (never after the last one).
///
/// # Errors
/// [`RuleError::EmptyWord`] for an empty word, and
/// [`RuleError::UnknownGlyphWidth`] when a mapped glyph has no width entry.
/// A missing width is never defaulted to zero; it would shift every offset
/// to its right.
pub fn compose(
    word: &str,
    case: CaseVariant,
    table: &GlyphTable,
    leading: u32,
    name: impl Into<String>,
) -> Result<GlyphComposite, RuleError> {
    let name = name.into();
    let glyphs = table.map_word(word, case);
    if glyphs.is_empty() {
        return Err(RuleError::EmptyWord { name });
    }

    let mut components = Vec::with_capacity(glyphs.len());
    let mut cursor = 0u32;
    for glyph in glyphs {
        let width = table.width_of(&glyph)?;
        components.push(GlyphPlacement {
            glyph,
            x_offset: cursor,
        });
        cursor += width + leading;
    }

    Ok(GlyphComposite {
        name,
        components,
        // cursor includes one trailing leading unit; spacing only belongs
        // between components.
        total_width: cursor - leading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_table() -> GlyphTable {
        GlyphTable::from_json(r#"{"widths": {"a": 100, "c": 120, "t": 90, "C": 140}}"#).unwrap()
    }

    #[test]
    fn test_compose_cat_offsets_and_width() {
        let table = cat_table();
        let composite = compose("cat", CaseVariant::Lower, &table, 10, "liga_0_lower").unwrap();
        assert_eq!(composite.name(), "liga_0_lower");
        let offsets: Vec<u32> = composite.components().iter().map(|c| c.x_offset).collect();
        assert_eq!(offsets, [0, 130, 240]);
        // 120 + 10 + 100 + 10 + 90 = 330; one trailing leading unit removed.
        assert_eq!(composite.total_width(), 330);
    }

    #[test]
    fn test_compose_zero_leading() {
        let table = cat_table();
        let composite = compose("cat", CaseVariant::Lower, &table, 0, "liga_0_lower").unwrap();
        let offsets: Vec<u32> = composite.components().iter().map(|c| c.x_offset).collect();
        assert_eq!(offsets, [0, 120, 220]);
        assert_eq!(composite.total_width(), 310);
    }

    #[test]
    fn test_compose_single_letter() {
        let table = cat_table();
        let composite = compose("a", CaseVariant::Lower, &table, 25, "liga_1_lower").unwrap();
        assert_eq!(composite.components().len(), 1);
        assert_eq!(composite.components()[0].x_offset, 0);
        // No inter-component spacing with one component.
        assert_eq!(composite.total_width(), 100);
    }

    #[test]
    fn test_compose_capitalized_variant() {
        let table = cat_table();
        let composite =
            compose("cat", CaseVariant::Capitalized, &table, 0, "liga_0_capitalized").unwrap();
        assert_eq!(composite.components()[0].glyph, "C");
        assert_eq!(composite.total_width(), 140 + 100 + 90);
    }

    #[test]
    fn test_compose_offsets_monotone() {
        let table = cat_table();
        let composite = compose("tacat", CaseVariant::Lower, &table, 5, "liga_2_lower").unwrap();
        let offsets: Vec<u32> = composite.components().iter().map(|c| c.x_offset).collect();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        // total_width is the last component's offset plus its width.
        let last = composite.components().last().unwrap();
        let last_width = table.width_of(&last.glyph).unwrap();
        assert_eq!(composite.total_width(), last.x_offset + last_width);
    }

    #[test]
    fn test_compose_empty_word_fails_fast() {
        let table = cat_table();
        let err = compose("", CaseVariant::Lower, &table, 0, "liga_3_lower").unwrap_err();
        assert!(matches!(err, RuleError::EmptyWord { name } if name == "liga_3_lower"));
    }

    #[test]
    fn test_compose_unknown_width_is_fatal() {
        let table = cat_table();
        let err = compose("cab", CaseVariant::Lower, &table, 0, "liga_4_lower").unwrap_err();
        assert!(matches!(err, RuleError::UnknownGlyphWidth { glyph } if glyph == "b"));
    }

    #[test]
    fn test_composite_name_tags() {
        assert_eq!(composite_name(0, CaseVariant::Lower), "liga_0_lower");
        assert_eq!(composite_name(17, CaseVariant::Capitalized), "liga_17_capitalized");
    }
}

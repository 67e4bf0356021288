//! Static glyph name/width table and letter-to-glyph mapping.
//!
//! The table is a JSON document with two maps: `glyphnames` (character →
//! glyph identifier, for letters whose glyph name is not the letter itself)
//! and `widths` (glyph identifier → advance width in font units). A default
//! table covering ASCII letters plus the Latin special letters ships
//! embedded in the crate; projects point `glyph_table` at their own file to
//! match a different base font.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::RuleError;

/// Default glyph table bundled with the crate.
pub const EMBEDDED_TABLE_JSON: &str = include_str!("../assets/consts.json");

/// Case variant of a generated composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseVariant {
    /// The word as given (word lists are lower-cased upstream).
    Lower,
    /// First letter upper-cased, rest untouched.
    Capitalized,
}

impl CaseVariant {
    /// Tag used in generated glyph names (`liga_3_lower`, `liga_3_capitalized`).
    pub fn tag(self) -> &'static str {
        match self {
            CaseVariant::Lower => "lower",
            CaseVariant::Capitalized => "capitalized",
        }
    }
}

/// Character → glyph-name and glyph-name → width lookup table.
#[derive(Debug, Clone, Deserialize)]
pub struct GlyphTable {
    /// Characters whose glyph identifier differs from the character itself.
    #[serde(default)]
    glyphnames: HashMap<char, String>,
    /// Advance width per glyph identifier, in font units.
    widths: HashMap<String, u32>,
}

impl GlyphTable {
    /// Parse a glyph table from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The table embedded in the crate.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_TABLE_JSON).expect("embedded glyph table is valid JSON")
    }

    /// Map one character to its glyph identifier.
    ///
    /// Characters without a table entry pass through unchanged; for plain
    /// ASCII letters the glyph name is the letter itself.
    pub fn map_letter(&self, ch: char) -> String {
        self.glyphnames
            .get(&ch)
            .cloned()
            .unwrap_or_else(|| ch.to_string())
    }

    /// Map a whole word to its glyph identifier sequence.
    ///
    /// For [`CaseVariant::Capitalized`] the first character is upper-cased
    /// *before* the table is consulted, so capitalized special letters
    /// resolve through their own upper-case table entries (`ñ` → `Ñ` →
    /// `Ntilde`) rather than falling through to identity.
    pub fn map_word(&self, word: &str, case: CaseVariant) -> Vec<String> {
        let mut glyphs = Vec::new();
        let mut chars = word.chars();
        if case == CaseVariant::Capitalized
            && let Some(first) = chars.next()
        {
            // to_uppercase can expand to more than one character (ß → SS);
            // every produced character gets its own component.
            for upper in first.to_uppercase() {
                glyphs.push(self.map_letter(upper));
            }
        }
        glyphs.extend(chars.map(|ch| self.map_letter(ch)));
        glyphs
    }

    /// Advance width of a glyph, in font units.
    pub fn width_of(&self, glyph: &str) -> Result<u32, RuleError> {
        self.widths
            .get(glyph)
            .copied()
            .ok_or_else(|| RuleError::UnknownGlyphWidth {
                glyph: glyph.to_string(),
            })
    }

    /// Whether the table has a width entry for this glyph.
    ///
    /// Used by the coverage checker to report gaps without aborting on the
    /// first one.
    pub fn has_width(&self, glyph: &str) -> bool {
        self.widths.contains_key(glyph)
    }
}

//! Typed error variants for the lexliga-rules crate.
//!
//! The engine fails fast: a width-table gap or an empty letter sequence is
//! a data-correctness problem in the inputs, never something to paper over
//! with a default value.

use thiserror::Error;

/// Errors produced by the rule synthesis engine.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A mapped glyph has no entry in the width table.
    ///
    /// Defaulting the width to zero would shift every component to the
    /// right of the gap, so composition aborts instead.
    #[error("no width entry for glyph '{glyph}' (fix the glyph table before generating)")]
    UnknownGlyphWidth {
        /// Glyph identifier missing from the width table.
        glyph: String,
    },

    /// A composite or rule was requested for an empty letter sequence.
    #[error("cannot build '{name}' from an empty letter sequence")]
    EmptyWord {
        /// Name of the composite or rule that was being built.
        name: String,
    },

    /// The glyph table document could not be parsed.
    #[error("glyph table is not valid JSON: {0}")]
    TableParse(#[from] serde_json::Error),
}

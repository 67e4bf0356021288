//! Rule engine for word-pair ligature generation.
//!
//! Everything here is pure data transformation: mapping words to glyph
//! sequences, composing placement descriptors, synthesizing guarded
//! substitution rules, resolving guard conflicts across the set, and
//! ordering the result for emission. File formats and process handling
//! live in the emission crate.

pub mod composite;
pub mod error;
pub mod glyphs;
pub mod resolver;
pub mod rule;
pub mod sequence;

pub use composite::{GlyphComposite, GlyphPlacement, compose, composite_name};
pub use error::RuleError;
pub use glyphs::{CaseVariant, EMBEDDED_TABLE_JSON, GlyphTable};
pub use resolver::resolve_guard_conflicts;
pub use rule::{BoundaryGuard, RuleSet, SubstitutionRule};
pub use sequence::sequence_by_specificity;

//! UFO emission adapter for the lexliga generator.
//!
//! This crate turns the rule engine's finished collections into a font
//! source the external toolchain can compile. It includes:
//!
//! - Build-directory staging from a base UFO
//! - Template loading and `### INJECT ###` marker rendering
//! - Per-composite `.glif` serialization plus contents/lib plist entries
//! - Feature-file rendering with boundary-guard `ignore sub` clauses
//! - A fontmake driver with overflow detection

pub mod emitter;
pub mod error;
pub mod fea;
pub mod fontmake;
pub mod glif;
pub mod staging;
pub mod templates;

pub use emitter::{emit_contents, emit_features, emit_glyphs, emit_lib};
pub use error::EmitError;
pub use fea::render_rule;
pub use fontmake::compile_ufo;
pub use glif::render_glif;
pub use staging::{cleanup_build, stage_base_ufo};
pub use templates::{
    MARKER_COMPONENTS, MARKER_INJECT, MARKER_NAME, MARKER_WIDTH, TemplateSet, render_marker,
};

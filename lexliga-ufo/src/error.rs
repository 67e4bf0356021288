//! Typed error types for lexliga-ufo.
//!
//! This module provides structured error types so callers at the crate boundary
//! can match on specific error variants instead of relying on opaque `anyhow`
//! strings.

use thiserror::Error;

/// Top-level error type for UFO emission and font compilation.
///
/// Covers the main failure categories that callers may want to distinguish:
/// - Template loading and marker injection
/// - Build-directory staging
/// - Generated-file output
/// - The external font compiler
#[derive(Debug, Error)]
pub enum EmitError {
    // -----------------------------------------------------------------------
    // Templates
    // -----------------------------------------------------------------------
    /// A template file could not be read from the templates directory.
    #[error("template read failed for '{path}': {source}")]
    TemplateRead {
        /// Path to the template that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A template is missing the marker its rendering step injects into.
    #[error("template '{template}' is missing its '{marker}' marker")]
    MissingMarker {
        /// Template file name.
        template: String,
        /// The literal marker text that was not found.
        marker: String,
    },

    // -----------------------------------------------------------------------
    // Staging
    // -----------------------------------------------------------------------
    /// The build directory could not be prepared from the base UFO.
    #[error("staging failed: {0}")]
    Staging(String),

    /// An I/O error occurred writing generated files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -----------------------------------------------------------------------
    // Font compilation
    // -----------------------------------------------------------------------
    /// The font compiler executable could not be started.
    #[error("failed to spawn '{command}': {source}")]
    FontmakeSpawn {
        /// The configured compiler command.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stdio stream of the compiler child process could not be captured.
    #[error("failed to capture fontmake {stream} stream")]
    FontmakeCapture {
        /// Which stream (`stdout` or `stderr`).
        stream: &'static str,
    },

    /// The compiler exited unsuccessfully for a reason other than overflow.
    #[error("font compilation failed with {status}")]
    FontmakeFailed {
        /// Exit status of the compiler process.
        status: std::process::ExitStatus,
    },

    /// The compiler hit the ligature-table offset overflow.
    #[error("ligature table overflowed during compilation; reduce max_rules and rerun")]
    LigatureOverflow,
}

//! Template loading and marker injection.
//!
//! The four project templates are plain text with `### INJECT ... ###`
//! markers; rendering is literal first-occurrence replacement. Anything
//! fancier (escaping, loops) belongs to the template author, not here.

use std::fs;
use std::path::Path;

use crate::error::EmitError;

/// Marker replaced with the composite glyph's name.
pub const MARKER_NAME: &str = "### INJECT NAME ###";
/// Marker replaced with the composite's `<component .../>` lines.
pub const MARKER_COMPONENTS: &str = "### INJECT COMPONENTS ###";
/// Marker replaced with the composite's advance width.
pub const MARKER_WIDTH: &str = "### INJECT WIDTH ###";
/// Marker replaced with the collected entry lines of a list-shaped template.
pub const MARKER_INJECT: &str = "### INJECT ###";

/// The four templates a generation run renders into.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Per-composite glyph outline (`liga.glif`).
    pub glif: String,
    /// Glyph directory listing (`contents.plist`).
    pub contents: String,
    /// Feature file with the ligature feature block (`features.fea`).
    pub features: String,
    /// Font lib with the public glyph order (`lib.plist`).
    pub lib: String,
}

impl TemplateSet {
    /// Load all four templates from `dir`.
    ///
    /// # Errors
    /// [`EmitError::TemplateRead`] naming the file that failed.
    pub fn load(dir: &Path) -> Result<Self, EmitError> {
        log::debug!("Loading templates from {}", dir.display());
        Ok(Self {
            glif: read_template(dir, "liga.glif")?,
            contents: read_template(dir, "contents.plist")?,
            features: read_template(dir, "features.fea")?,
            lib: read_template(dir, "lib.plist")?,
        })
    }
}

fn read_template(dir: &Path, name: &str) -> Result<String, EmitError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| EmitError::TemplateRead {
        path: path.display().to_string(),
        source,
    })
}

/// Replace the first occurrence of `marker` in `template` with `replacement`.
///
/// # Errors
/// [`EmitError::MissingMarker`] when the marker does not occur at all.
pub fn render_marker(
    template: &str,
    template_name: &str,
    marker: &str,
    replacement: &str,
) -> Result<String, EmitError> {
    if !template.contains(marker) {
        return Err(EmitError::MissingMarker {
            template: template_name.to_string(),
            marker: marker.to_string(),
        });
    }
    Ok(template.replacen(marker, replacement, 1))
}

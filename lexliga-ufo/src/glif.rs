//! Rendering composites into `.glif` text and plist entry lines.

use lexliga_rules::GlyphComposite;

use crate::error::EmitError;
use crate::templates::{MARKER_COMPONENTS, MARKER_NAME, MARKER_WIDTH, render_marker};

/// Render one composite through the glif template.
///
/// Components become `<component base="..." xOffset="..."/>` lines in
/// left-to-right order; the advance width is the composite's total width.
pub fn render_glif(template: &str, composite: &GlyphComposite) -> Result<String, EmitError> {
    let components: Vec<String> = composite
        .components()
        .iter()
        .map(|p| format!(r#"<component base="{}" xOffset="{}"/>"#, p.glyph, p.x_offset))
        .collect();

    let rendered = render_marker(template, "liga.glif", MARKER_NAME, composite.name())?;
    let rendered = render_marker(&rendered, "liga.glif", MARKER_COMPONENTS, &components.join("\n"))?;
    render_marker(
        &rendered,
        "liga.glif",
        MARKER_WIDTH,
        &composite.total_width().to_string(),
    )
}

/// The glyph's `contents.plist` line: name keyed to its glif file.
pub fn contents_entry(name: &str) -> String {
    format!("<key>{name}</key> <string>{name}.glif</string>")
}

/// The glyph's `lib.plist` glyph-order line.
pub fn lib_entry(name: &str) -> String {
    format!("<string>{name}</string>")
}

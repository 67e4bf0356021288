//! Writing generated sources into the staged UFO.
//!
//! Takes the engine's finished collections (composites and their name list
//! in generation order, rules already in priority order) and renders them
//! through the templates into the staged UFO's files.

use std::fs;
use std::path::Path;

use lexliga_rules::{GlyphComposite, SubstitutionRule};

use crate::error::EmitError;
use crate::fea::render_rule;
use crate::glif::{contents_entry, lib_entry, render_glif};
use crate::templates::{MARKER_INJECT, TemplateSet, render_marker};

/// Write one `.glif` file per composite into the staged UFO's glyphs dir.
pub fn emit_glyphs(
    staged_ufo: &Path,
    templates: &TemplateSet,
    composites: &[GlyphComposite],
) -> Result<(), EmitError> {
    let glyphs_dir = staged_ufo.join("glyphs");
    for composite in composites {
        let rendered = render_glif(&templates.glif, composite)?;
        let path = glyphs_dir.join(format!("{}.glif", composite.name()));
        log::debug!("Writing {}", path.display());
        fs::write(path, rendered)?;
    }
    Ok(())
}

/// Write `glyphs/contents.plist` listing every generated glyph name.
pub fn emit_contents(
    staged_ufo: &Path,
    templates: &TemplateSet,
    names: &[String],
) -> Result<(), EmitError> {
    let entries: Vec<String> = names.iter().map(|n| contents_entry(n)).collect();
    let rendered = render_marker(
        &templates.contents,
        "contents.plist",
        MARKER_INJECT,
        &entries.join("\n"),
    )?;
    fs::write(staged_ufo.join("glyphs").join("contents.plist"), rendered)?;
    Ok(())
}

/// Write `features.fea` with the rules' statement blocks in the given order.
///
/// The caller is responsible for ordering; rules arrive already sequenced by
/// descending specificity.
pub fn emit_features(
    staged_ufo: &Path,
    templates: &TemplateSet,
    rules: &[SubstitutionRule],
) -> Result<(), EmitError> {
    let blocks: Vec<String> = rules.iter().map(render_rule).collect();
    let rendered = render_marker(
        &templates.features,
        "features.fea",
        MARKER_INJECT,
        &blocks.join("\n"),
    )?;
    fs::write(staged_ufo.join("features.fea"), rendered)?;
    Ok(())
}

/// Write `lib.plist` appending every generated glyph name to the glyph order.
pub fn emit_lib(
    staged_ufo: &Path,
    templates: &TemplateSet,
    names: &[String],
) -> Result<(), EmitError> {
    let entries: Vec<String> = names.iter().map(|n| lib_entry(n)).collect();
    let rendered = render_marker(&templates.lib, "lib.plist", MARKER_INJECT, &entries.join("\n"))?;
    fs::write(staged_ufo.join("lib.plist"), rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexliga_rules::{CaseVariant, GlyphTable, compose};

    fn templates() -> TemplateSet {
        TemplateSet {
            glif: "<glyph name=\"### INJECT NAME ###\"><advance width=\"### INJECT WIDTH ###\"/>\
                   ### INJECT COMPONENTS ###</glyph>"
                .to_string(),
            contents: "<dict>\n### INJECT ###\n</dict>".to_string(),
            features: "feature liga {\n### INJECT ###\n} liga;".to_string(),
            lib: "<array>\n### INJECT ###\n</array>".to_string(),
        }
    }

    fn staged(dir: &Path) -> std::path::PathBuf {
        let staged = dir.join("LexLiga.ufo");
        fs::create_dir_all(staged.join("glyphs")).unwrap();
        staged
    }

    #[test]
    fn test_emit_glyphs_writes_one_file_per_composite() {
        let dir = tempfile::tempdir().unwrap();
        let staged = staged(dir.path());
        let table = GlyphTable::from_json(r#"{"widths": {"n": 100, "o": 110}}"#).unwrap();
        let composites = vec![
            compose("no", CaseVariant::Lower, &table, 0, "liga_0_lower").unwrap(),
            compose("on", CaseVariant::Lower, &table, 0, "liga_1_lower").unwrap(),
        ];

        emit_glyphs(&staged, &templates(), &composites).unwrap();

        let first = fs::read_to_string(staged.join("glyphs").join("liga_0_lower.glif")).unwrap();
        assert!(first.contains("liga_0_lower"));
        assert!(first.contains(r#"<component base="n" xOffset="0"/>"#));
        assert!(staged.join("glyphs").join("liga_1_lower.glif").is_file());
    }

    #[test]
    fn test_emit_contents_lists_every_name() {
        let dir = tempfile::tempdir().unwrap();
        let staged = staged(dir.path());
        let names = vec!["liga_0_lower".to_string()];

        emit_contents(&staged, &templates(), &names).unwrap();

        let plist = fs::read_to_string(staged.join("glyphs").join("contents.plist")).unwrap();
        assert!(plist.contains("<key>liga_0_lower</key> <string>liga_0_lower.glif</string>"));
        assert!(!plist.contains("### INJECT ###"));
    }

    #[test]
    fn test_emit_features_preserves_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let staged = staged(dir.path());
        let long: Vec<String> = "band".chars().map(|c| c.to_string()).collect();
        let short: Vec<String> = "an".chars().map(|c| c.to_string()).collect();
        let rules = vec![
            SubstitutionRule::synthesize(long, "liga_1_lower", false, "LETTER").unwrap(),
            SubstitutionRule::synthesize(short, "liga_0_lower", false, "LETTER").unwrap(),
        ];

        emit_features(&staged, &templates(), &rules).unwrap();

        let fea = fs::read_to_string(staged.join("features.fea")).unwrap();
        let band = fea.find("sub b a n d by liga_1_lower;").unwrap();
        let an = fea.find("sub a n by liga_0_lower;").unwrap();
        assert!(band < an);
    }

    #[test]
    fn test_emit_lib_appends_glyph_order() {
        let dir = tempfile::tempdir().unwrap();
        let staged = staged(dir.path());
        let names = vec!["liga_0_lower".to_string(), "liga_0_capitalized".to_string()];

        emit_lib(&staged, &templates(), &names).unwrap();

        let lib = fs::read_to_string(staged.join("lib.plist")).unwrap();
        assert!(lib.contains("<string>liga_0_lower</string>\n<string>liga_0_capitalized</string>"));
    }

    #[test]
    fn test_emit_features_without_marker_fails() {
        let dir = tempfile::tempdir().unwrap();
        let staged = staged(dir.path());
        let mut broken = templates();
        broken.features = "feature liga { } liga;".to_string();

        let err = emit_features(&staged, &broken, &[]).unwrap_err();
        assert!(matches!(err, EmitError::MissingMarker { template, .. } if template == "features.fea"));
    }
}

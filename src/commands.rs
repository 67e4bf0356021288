//! Subcommands that run outside the generation pipeline.
//!
//! Both are println-driven operator tools: `check` dry-runs the project
//! setup and reports problems, `init` scaffolds a new project from the
//! embedded starter assets.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use lexliga_config::Config;
use lexliga_rules::{CaseVariant, GlyphTable};
use lexliga_ufo::{
    MARKER_COMPONENTS, MARKER_INJECT, MARKER_NAME, MARKER_WIDTH, TemplateSet,
};

use crate::pipeline;
use crate::wordlist::WordPairs;

/// Validate the project without writing anything.
///
/// Loads the config, templates and glyph table, then walks the word pairs a
/// run would consume and reports every glyph that has no width entry.
/// Returns the number of problems found.
pub fn check(config_path: &Path) -> Result<usize> {
    let config = Config::load_or_default(config_path)?;
    let table = pipeline::load_glyph_table(&config)?;

    println!("Config:    {}", config_path.display());
    println!("From list: {}", config.from_wordlist.display());
    println!("To list:   {}", config.to_wordlist.display());
    println!("Base UFO:  {}", config.ufo_base.display());
    println!("Templates: {}", config.templates_dir.display());
    println!();

    let mut problems = 0usize;

    if !config.ufo_base.is_dir() {
        println!(
            "PROBLEM: base UFO '{}' is not a directory",
            config.ufo_base.display()
        );
        problems += 1;
    }

    problems += check_templates(&config);
    problems += check_coverage(&config, &table)?;

    println!();
    if problems == 0 {
        println!("No problems found.");
    } else {
        println!("{problems} problem(s) found.");
    }
    Ok(problems)
}

/// Report templates that are missing or lack their injection markers.
fn check_templates(config: &Config) -> usize {
    let templates = match TemplateSet::load(&config.templates_dir) {
        Ok(templates) => templates,
        Err(e) => {
            println!("PROBLEM: {e}");
            return 1;
        }
    };

    let checks: [(&str, &str, &[&str]); 4] = [
        (
            "liga.glif",
            templates.glif.as_str(),
            &[MARKER_NAME, MARKER_COMPONENTS, MARKER_WIDTH],
        ),
        ("contents.plist", templates.contents.as_str(), &[MARKER_INJECT]),
        ("features.fea", templates.features.as_str(), &[MARKER_INJECT]),
        ("lib.plist", templates.lib.as_str(), &[MARKER_INJECT]),
    ];

    let mut problems = 0;
    for (name, text, markers) in checks {
        for marker in markers {
            if !text.contains(marker) {
                println!("PROBLEM: template {name} is missing its '{marker}' marker");
                problems += 1;
            }
        }
    }
    problems
}

/// Report glyphs in the word lists that the table has no width for.
fn check_coverage(config: &Config, table: &GlyphTable) -> Result<usize> {
    let pairs = match WordPairs::open(&config.from_wordlist, &config.to_wordlist) {
        Ok(pairs) => pairs,
        Err(e) => {
            println!("PROBLEM: {e:#}");
            return Ok(1);
        }
    };

    let mut variants = vec![CaseVariant::Lower];
    if config.capitalized {
        variants.push(CaseVariant::Capitalized);
    }

    let mut reported = BTreeSet::new();
    let mut problems = 0usize;
    for (index, pair) in pairs.take(config.max_rules).enumerate() {
        let (from, to) = pair?;
        for &case in &variants {
            for (label, word) in [("from", from.to_lowercase()), ("to", to.to_lowercase())] {
                for glyph in table.map_word(&word, case) {
                    if !table.has_width(&glyph) && reported.insert(glyph.clone()) {
                        println!(
                            "PROBLEM: no width for glyph '{glyph}' (pair {index}, {label} '{word}')"
                        );
                        problems += 1;
                    }
                }
            }
        }
    }
    Ok(problems)
}

/// Scaffold a new project: config file, starter templates and word lists.
///
/// Refuses to overwrite anything that already exists; nothing is written
/// until every target path is clear.
pub fn init(dir: &Path) -> Result<()> {
    const FILES: &[(&str, &str)] = &[
        ("lexliga.yaml", include_str!("../assets/lexliga.yaml")),
        ("src/from.txt", include_str!("../assets/from.txt")),
        ("src/to.txt", include_str!("../assets/to.txt")),
        (
            "src/templates/liga.glif",
            include_str!("../assets/templates/liga.glif"),
        ),
        (
            "src/templates/contents.plist",
            include_str!("../assets/templates/contents.plist"),
        ),
        (
            "src/templates/features.fea",
            include_str!("../assets/templates/features.fea"),
        ),
        (
            "src/templates/lib.plist",
            include_str!("../assets/templates/lib.plist"),
        ),
    ];

    println!("=============================================");
    println!("  lexliga project scaffold");
    println!("=============================================");
    println!();

    for (rel, _) in FILES {
        let target = dir.join(rel);
        if target.exists() {
            anyhow::bail!("refusing to overwrite existing {}", target.display());
        }
    }

    for (rel, contents) in FILES {
        let target = dir.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        println!("Created {}", target.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Replace src/from.txt and src/to.txt with your word lists");
    println!("  2. Put your base font source at src/LexLiga.ufo.base");
    println!("  3. Run `lexliga` to generate and compile the font");

    Ok(())
}

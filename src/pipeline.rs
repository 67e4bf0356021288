//! The generation pipeline: word lists in, staged font sources (and
//! optionally a compiled font) out.
//!
//! Generation is pure accumulation into three collections (composites,
//! rules, glyph names); all filesystem work happens afterwards, so a bad
//! input aborts the run before the previous build is touched.

use std::fs;

use anyhow::{Context, Result};
use lexliga_config::Config;
use lexliga_rules::{
    CaseVariant, GlyphComposite, GlyphTable, RuleSet, SubstitutionRule, compose, composite_name,
    resolve_guard_conflicts, sequence_by_specificity,
};
use lexliga_ufo::{
    TemplateSet, cleanup_build, compile_ufo, emit_contents, emit_features, emit_glyphs, emit_lib,
    stage_base_ufo,
};

use crate::cli::RuntimeOptions;
use crate::wordlist::WordPairs;

/// Print one progress line on stdout, indented two spaces per depth level.
pub fn signpost(depth: usize, msg: &str) {
    println!("{}- {}", "  ".repeat(depth), msg);
}

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(config: &mut Config, options: &RuntimeOptions) {
    if let Some(max_rules) = options.max_rules {
        config.max_rules = max_rules;
    }
    if let Some(leading) = options.leading {
        config.leading = leading;
    }
    if let Some(word_boundaries) = options.word_boundaries {
        config.word_boundaries = word_boundaries;
    }
    if let Some(capitalized) = options.capitalized {
        config.capitalized = capitalized;
    }
    if options.no_compile {
        config.compile = false;
    }
}

/// Everything one generation pass produces.
pub struct Generated {
    /// Composites in generation order.
    pub composites: Vec<GlyphComposite>,
    /// Rules, already resolved and sequenced by descending specificity.
    pub rules: Vec<SubstitutionRule>,
    /// Composite names in generation order, for contents.plist and the
    /// lib.plist glyph order.
    pub glyph_names: Vec<String>,
    /// Word pairs consumed, skips included.
    pub pairs_consumed: usize,
}

fn case_variants(capitalized: bool) -> &'static [CaseVariant] {
    if capitalized {
        &[CaseVariant::Lower, CaseVariant::Capitalized]
    } else {
        &[CaseVariant::Lower]
    }
}

/// Run rule generation over the word pairs.
///
/// Pairs are consumed in lockstep until the source runs out or `max_rules`
/// pairs have been taken. Both words are lower-cased first; a pair whose
/// words are then identical is skipped but still consumes its index, so
/// generated names can have gaps. Duplicate patterns keep the first rule
/// and produce no composite for the loser.
pub fn generate<I>(pairs: I, config: &Config, table: &GlyphTable) -> Result<Generated>
where
    I: IntoIterator<Item = Result<(String, String)>>,
{
    let mut composites = Vec::new();
    let mut glyph_names = Vec::new();
    let mut set = RuleSet::new();
    let mut pairs_consumed = 0usize;

    for pair in pairs.into_iter().take(config.max_rules) {
        let (from, to) = pair?;
        let index = pairs_consumed;
        pairs_consumed += 1;

        let from = from.to_lowercase();
        let to = to.to_lowercase();
        if from == to {
            log::debug!("Skipping pair {index}: '{from}' maps to itself");
            continue;
        }

        signpost(1, &format!("Generating liga_{index} {from} -> {to}"));
        for &case in case_variants(config.capitalized) {
            let pattern = table.map_word(&from, case);
            let name = composite_name(index, case);
            let rule = SubstitutionRule::synthesize(
                pattern,
                name.as_str(),
                config.word_boundaries,
                &config.letter_class,
            )?;
            if !set.insert(rule) {
                continue;
            }
            let composite = compose(&to, case, table, config.leading, name.as_str())
                .with_context(|| format!("composing '{to}' for liga_{index}"))?;
            composites.push(composite);
            glyph_names.push(name);
        }
    }

    log::info!(
        "Generated {} rules from {} word pairs",
        set.len(),
        pairs_consumed
    );

    let mut rules = set.into_rules();
    resolve_guard_conflicts(&mut rules);
    let rules = sequence_by_specificity(rules);

    Ok(Generated {
        composites,
        rules,
        glyph_names,
        pairs_consumed,
    })
}

/// Load the glyph table: the configured file, or the embedded default.
pub fn load_glyph_table(config: &Config) -> Result<GlyphTable> {
    match &config.glyph_table {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading glyph table {}", path.display()))?;
            GlyphTable::from_json(&json)
                .with_context(|| format!("parsing glyph table {}", path.display()))
        }
        None => Ok(GlyphTable::embedded()),
    }
}

/// Run the whole pipeline for `config`.
pub fn run(config: &Config) -> Result<()> {
    let table = load_glyph_table(config)?;
    let templates = TemplateSet::load(&config.templates_dir)?;
    let pairs = WordPairs::open(&config.from_wordlist, &config.to_wordlist)?;

    signpost(0, "Generating ligatures and collecting metadata");
    let generated = generate(pairs, config, &table)?;
    if generated.rules.is_empty() {
        log::warn!("No rules generated, the font will only contain the base glyphs");
    }

    let staged = config.staged_ufo();
    signpost(0, &format!("Creating {}", staged.display()));
    stage_base_ufo(&config.ufo_base, &config.build_dir, &staged)
        .with_context(|| format!("staging {}", config.ufo_base.display()))?;

    signpost(0, "Writing ligature glyphs");
    emit_glyphs(&staged, &templates, &generated.composites)?;

    signpost(0, "Generating glyphs/contents.plist");
    emit_contents(&staged, &templates, &generated.glyph_names)?;

    signpost(0, "Generating features.fea");
    emit_features(&staged, &templates, &generated.rules)?;

    signpost(0, "Generating lib.plist");
    emit_lib(&staged, &templates, &generated.glyph_names)?;

    if config.compile {
        signpost(0, &format!("Running {}", config.fontmake_command));
        compile_ufo(&config.fontmake_command, &config.fontmake_args, &staged)?;
    }

    if !config.keep_build {
        signpost(0, "Cleaning up");
        cleanup_build(&config.build_dir)?;
    }

    Ok(())
}

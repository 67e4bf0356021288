//! The `Config` struct: every knob of a generation run.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one generation run.
///
/// Loaded from a YAML file (`lexliga.yaml` by convention); every field has a
/// default so a partial or absent file still yields a working configuration.
/// Environment variables in the raw text are substituted before parsing, see
/// [`crate::env_vars::substitute_variables`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spacing units inserted between composed glyph components
    #[serde(default = "crate::defaults::leading")]
    pub leading: u32,

    /// Stop generation after this many word pairs consumed (skipped pairs
    /// still count against the limit)
    #[serde(default = "crate::defaults::max_rules")]
    pub max_rules: usize,

    /// Also generate a capitalized variant per word pair
    #[serde(default = "crate::defaults::bool_true")]
    pub capitalized: bool,

    /// Restrict substitutions to whole words with letter-class guards
    #[serde(default = "crate::defaults::bool_true")]
    pub word_boundaries: bool,

    /// Name of the feature-file glyph class the guards reference, without
    /// the `@` sigil
    #[serde(default = "crate::defaults::letter_class")]
    pub letter_class: String,

    /// Word list whose words get replaced
    #[serde(default = "crate::defaults::from_wordlist")]
    pub from_wordlist: PathBuf,

    /// Word list supplying the replacements, consumed in lockstep
    #[serde(default = "crate::defaults::to_wordlist")]
    pub to_wordlist: PathBuf,

    /// Base UFO directory copied into the build directory before generation
    #[serde(default = "crate::defaults::ufo_base")]
    pub ufo_base: PathBuf,

    /// Directory name of the staged UFO inside the build directory
    #[serde(default = "crate::defaults::font_name")]
    pub font_name: String,

    /// Build directory, recreated fresh on every run
    #[serde(default = "crate::defaults::build_dir")]
    pub build_dir: PathBuf,

    /// Directory holding the glif/plist/fea templates
    #[serde(default = "crate::defaults::templates_dir")]
    pub templates_dir: PathBuf,

    /// Glyph name/width table override; the embedded table is used when absent
    #[serde(default)]
    pub glyph_table: Option<PathBuf>,

    /// Font compiler executable invoked over the staged UFO
    #[serde(default = "crate::defaults::fontmake_command")]
    pub fontmake_command: String,

    /// Extra arguments appended to the compiler invocation
    #[serde(default = "crate::defaults::fontmake_args")]
    pub fontmake_args: Vec<String>,

    /// Run the font compiler after emitting sources
    #[serde(default = "crate::defaults::bool_true")]
    pub compile: bool,

    /// Keep the build directory after the run for inspection
    #[serde(default = "crate::defaults::bool_true")]
    pub keep_build: bool,

    /// Log level filter: error, warn, info, debug or trace
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leading: crate::defaults::leading(),
            max_rules: crate::defaults::max_rules(),
            capitalized: crate::defaults::bool_true(),
            word_boundaries: crate::defaults::bool_true(),
            letter_class: crate::defaults::letter_class(),
            from_wordlist: crate::defaults::from_wordlist(),
            to_wordlist: crate::defaults::to_wordlist(),
            ufo_base: crate::defaults::ufo_base(),
            font_name: crate::defaults::font_name(),
            build_dir: crate::defaults::build_dir(),
            templates_dir: crate::defaults::templates_dir(),
            glyph_table: None,
            fontmake_command: crate::defaults::fontmake_command(),
            fontmake_args: crate::defaults::fontmake_args(),
            compile: crate::defaults::bool_true(),
            keep_build: crate::defaults::bool_true(),
            log_level: crate::defaults::log_level(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// Raw text goes through environment-variable substitution before the
    /// YAML parse, and the result is validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let contents = crate::env_vars::substitute_variables(&contents);
        let config: Config = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, fall back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Path of the staged UFO the run writes into: `build_dir/font_name`.
    pub fn staged_ufo(&self) -> PathBuf {
        self.build_dir.join(&self.font_name)
    }

    /// Check field values that serde cannot.
    ///
    /// Called by [`Self::load`]; call again after applying command-line
    /// overrides, since those bypass the load path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rules == 0 {
            return Err(ConfigError::Validation(
                "max_rules must be at least 1".to_string(),
            ));
        }
        if self.font_name.is_empty() || !self.font_name.ends_with(".ufo") {
            return Err(ConfigError::Validation(format!(
                "font_name '{}' must be a non-empty name ending in .ufo",
                self.font_name,
            )));
        }
        if self.letter_class.is_empty() || self.letter_class.contains('@') {
            return Err(ConfigError::Validation(format!(
                "letter_class '{}' must be a bare class name without '@'",
                self.letter_class,
            )));
        }
        Ok(())
    }
}

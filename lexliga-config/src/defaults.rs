//! Default value functions for configuration.
//!
//! Free functions used as `#[serde(default = "crate::defaults::...")]`
//! attributes on `Config` fields, so a partial YAML file deserializes with
//! the same values `Config::default()` produces.

use std::path::PathBuf;

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Generation ─────────────────────────────────────────────────────────────

pub fn leading() -> u32 {
    0
}

/// The compiled ligature table overflows somewhere between 800 and 2000
/// rules; 800 is a safe ceiling.
pub fn max_rules() -> usize {
    800
}

pub fn letter_class() -> String {
    "LETTER".to_string()
}

// ── Input & staging layout ─────────────────────────────────────────────────

pub fn from_wordlist() -> PathBuf {
    PathBuf::from("src/from.txt")
}

pub fn to_wordlist() -> PathBuf {
    PathBuf::from("src/to.txt")
}

pub fn ufo_base() -> PathBuf {
    PathBuf::from("src/LexLiga.ufo.base")
}

pub fn font_name() -> String {
    "LexLiga.ufo".to_string()
}

pub fn build_dir() -> PathBuf {
    PathBuf::from("tmp")
}

pub fn templates_dir() -> PathBuf {
    PathBuf::from("src/templates")
}

// ── Compilation ────────────────────────────────────────────────────────────

pub fn fontmake_command() -> String {
    "fontmake".to_string()
}

pub fn fontmake_args() -> Vec<String> {
    vec!["-o".to_string(), "ttf".to_string()]
}

// ── Logging ────────────────────────────────────────────────────────────────

pub fn log_level() -> String {
    "info".to_string()
}

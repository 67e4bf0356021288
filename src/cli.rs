//! Command-line interface for lexliga.
//!
//! This module handles CLI argument parsing and the subcommands that run
//! outside the generation pipeline (project checks and scaffolding).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lexliga - word-substitution ligature font generator
#[derive(Parser)]
#[command(name = "lexliga")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to load
    #[arg(long, value_name = "PATH", default_value = "lexliga.yaml", global = true)]
    pub config: PathBuf,

    /// Stop after this many word pairs (overrides config)
    #[arg(long, value_name = "N")]
    pub max_rules: Option<usize>,

    /// Spacing units between composed components (overrides config)
    #[arg(long, value_name = "UNITS")]
    pub leading: Option<u32>,

    /// Restrict substitution to whole words (overrides config)
    #[arg(long, conflicts_with = "no_boundaries")]
    pub boundaries: bool,

    /// Let rules fire inside longer words too
    #[arg(long)]
    pub no_boundaries: bool,

    /// Also generate capitalized variants (overrides config)
    #[arg(long, conflicts_with = "no_capitalized")]
    pub capitalized: bool,

    /// Generate lowercase variants only
    #[arg(long)]
    pub no_capitalized: bool,

    /// Emit font sources only, skip the compiler run
    #[arg(long)]
    pub no_compile: bool,

    /// Log level: error, warn, info, debug or trace (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check config, templates and glyph coverage without writing anything
    Check,

    /// Scaffold a config file and starter templates for a new project
    Init {
        /// Directory to scaffold into
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

/// Runtime options passed from CLI to the pipeline
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Configuration file path
    pub config_path: PathBuf,
    /// Override for the word-pair limit
    pub max_rules: Option<usize>,
    /// Override for inter-component spacing
    pub leading: Option<u32>,
    /// Override for word-boundary guarding (None = use config)
    pub word_boundaries: Option<bool>,
    /// Override for capitalized-variant generation (None = use config)
    pub capitalized: Option<bool>,
    /// Skip the font compiler run
    pub no_compile: bool,
    /// Log level override (highest precedence)
    pub log_level: Option<String>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with a generation run, with optional runtime options
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check) => {
            let code = match crate::commands::check(&cli.config) {
                Ok(0) => 0,
                Ok(_) => 1,
                Err(e) => {
                    eprintln!("lexliga: error: {e:#}");
                    1
                }
            };
            CliResult::Exit(code)
        }
        Some(Commands::Init { dir }) => {
            let code = match crate::commands::init(&dir) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("lexliga: error: {e:#}");
                    1
                }
            };
            CliResult::Exit(code)
        }
        None => {
            // Paired on/off flags fold into Option<bool> so an unset pair
            // leaves the config value alone.
            let word_boundaries = match (cli.boundaries, cli.no_boundaries) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let capitalized = match (cli.capitalized, cli.no_capitalized) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let options = RuntimeOptions {
                config_path: cli.config,
                max_rules: cli.max_rules,
                leading: cli.leading,
                word_boundaries,
                capitalized,
                no_compile: cli.no_compile,
                log_level: cli.log_level,
            };
            CliResult::Continue(options)
        }
    }
}

//! Stderr backend for the `log` facade.
//!
//! Stdout belongs to the signpost progress lines, so everything routed
//! through `log` goes to stderr with a level prefix. Level precedence:
//! the `--log-level` flag, then the `LEXLIGA_LOG` environment variable,
//! then the config file's `log_level`, then "info".

use std::sync::atomic::{AtomicBool, Ordering};

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

/// Set once the CLI or environment fixed the level, so the config file's
/// `log_level` no longer applies.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Install the stderr logger and apply the startup level.
///
/// `cli_level` comes from `--log-level`; when it is absent the `LEXLIGA_LOG`
/// environment variable is consulted. With neither set the level stays at
/// "info" until [`apply_config_level`] runs.
pub fn init(cli_level: Option<&str>) {
    // set_logger fails only when a logger is already installed; repeated
    // init calls (tests) keep the first installation.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);

    let from_cli = cli_level.and_then(|name| {
        let parsed = parse_level(name);
        if parsed.is_none() {
            log::warn!("unknown --log-level '{name}', using info");
        }
        parsed
    });
    let from_env = std::env::var("LEXLIGA_LOG")
        .ok()
        .and_then(|name| parse_level(&name));

    if let Some(level) = from_cli.or(from_env) {
        LEVEL_PINNED.store(true, Ordering::Relaxed);
        log::set_max_level(level);
    }
}

/// Apply the config file's `log_level`, unless the CLI or environment
/// already pinned one.
pub fn apply_config_level(name: &str) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    match parse_level(name) {
        Some(level) => log::set_max_level(level),
        None => log::warn!("unknown log_level '{name}' in config, keeping info"),
    }
}

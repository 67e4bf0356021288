use anyhow::Result;
use lexliga::{cli, logging, pipeline};
use lexliga_config::Config;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            // Non-zero exit: use process::exit so the shell sees the correct
            // exit code. No pipeline state exists yet, so no destructors are
            // skipped.
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    // CLI --log-level takes highest precedence, then LEXLIGA_LOG, then the
    // config file's log_level (applied once the config is loaded).
    logging::init(runtime_options.log_level.as_deref());

    let result = run(&runtime_options);
    match result {
        Ok(()) => Ok(()),
        Err(ref e) => {
            eprintln!("lexliga: error: {e:#}");
            // Return the original error so main exits with code 1 (anyhow default)
            result
        }
    }
}

fn run(options: &cli::RuntimeOptions) -> Result<()> {
    let mut config = Config::load_or_default(&options.config_path)?;
    logging::apply_config_level(&config.log_level);
    pipeline::apply_overrides(&mut config, options);
    // Overrides bypass the load-time validation, so check again.
    config.validate()?;

    log::info!(
        "Starting generation run ({} -> {})",
        config.from_wordlist.display(),
        config.to_wordlist.display()
    );
    pipeline::run(&config)
}

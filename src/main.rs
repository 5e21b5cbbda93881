use anyhow::Result;

use sunweeks::constants::EXIT_FAILURE;
use sunweeks::{Config, Log, pipeline};

/// Load the configuration and run the pipeline once.
fn run() -> Result<()> {
    let config = Config::load()?;
    config.log_config();

    pipeline::run(&config)?;
    Ok(())
}

fn main() {
    Log::log_version();

    if let Err(e) = run() {
        Log::log_pipe();
        Log::log_critical(&format!("{:#}", e));
        Log::log_end();
        std::process::exit(EXIT_FAILURE);
    }

    Log::log_end();
}

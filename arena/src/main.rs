//! Arena - NoGo match runner
//!
//! Seats a black and a white agent (random or MCTS), plays the configured
//! number of games and logs a summary of the results.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

mod agent;
mod arena;
mod config;
mod mcts_policy;
mod policy;
mod stats;

use crate::agent::build_agent;
use crate::arena::Arena;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse and validate configuration
    let config = Config::parse();
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let mcts_config = config.mcts_config();
    let black = build_agent(&config.black, &mcts_config).context("invalid black agent")?;
    let white = build_agent(&config.white, &mcts_config).context("invalid white agent")?;

    let mut arena = Arena::new(config.width, config.height, black, white)?;

    match arena.run(config.games) {
        Ok(stats) => {
            stats.log_summary();
            Ok(())
        }
        Err(e) => {
            error!("Arena failed: {:#}", e);
            Err(e)
        }
    }
}

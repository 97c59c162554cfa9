//! Configuration for the arena binary
//!
//! Defaults come from config.toml with `NOGO_*` environment overrides (see
//! `engine-config`). CLI arguments take highest priority.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use games_nogo::MAX_SIZE;
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_width() -> usize {
    CENTRAL_CONFIG.board.width
}

fn default_height() -> usize {
    CENTRAL_CONFIG.board.height
}

fn default_black() -> String {
    CENTRAL_CONFIG.arena.black.clone()
}

fn default_white() -> String {
    CENTRAL_CONFIG.arena.white.clone()
}

fn default_num_simulations() -> u32 {
    CENTRAL_CONFIG.mcts.num_simulations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_decision_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.decision_exploration
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "NoGo arena - plays matches between agents")]
#[command(
    long_about = "Plays NoGo games between a black and a white agent and reports the results.

Agents are described by key=value strings such as \"name=mcts role=black T=2000 seed=1\".
Configuration is loaded from config.toml with NOGO_* environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Board width
    #[arg(long, default_value_t = default_width())]
    pub width: usize,

    /// Board height
    #[arg(long, default_value_t = default_height())]
    pub height: usize,

    /// Black agent arguments
    #[arg(long, default_value_t = default_black())]
    pub black: String,

    /// White agent arguments
    #[arg(long, default_value_t = default_white())]
    pub white: String,

    /// MCTS simulations per move (agents may override with T=...)
    #[arg(long, default_value_t = default_num_simulations())]
    pub num_simulations: u32,

    /// UCT exploration constant during selection
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// UCT exploration constant for the final move choice
    #[arg(long, default_value_t = default_decision_exploration())]
    pub decision_exploration: f64,

    /// Seed for MCTS agents without their own seed (default: entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        let sizes = 1..=MAX_SIZE as usize;
        if !sizes.contains(&self.width) || !sizes.contains(&self.height) {
            return Err(anyhow!(
                "board size {}x{} out of range, each edge must be within 1..={}",
                self.width,
                self.height,
                MAX_SIZE
            ));
        }

        if self.num_simulations == 0 {
            return Err(anyhow!("num_simulations must be greater than 0"));
        }

        for (name, value) in [
            ("exploration", self.exploration),
            ("decision_exploration", self.decision_exploration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow!("{} must be a non-negative number, got {}", name, value));
            }
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Search settings shared by every MCTS agent.
    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig {
            num_simulations: self.num_simulations,
            exploration: self.exploration,
            decision_exploration: self.decision_exploration,
            seed: self.seed.or(CENTRAL_CONFIG.mcts.seed),
        }
    }
}

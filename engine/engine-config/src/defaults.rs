//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time and parsed on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    board: BoardDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct BoardDefaults {
    width: usize,
    height: usize,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_simulations: u32,
    exploration: f64,
    decision_exploration: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    black: String,
    white: String,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Board
pub fn board_width() -> usize {
    DEFAULTS.board.width
}
pub fn board_height() -> usize {
    DEFAULTS.board.height
}

// MCTS
pub fn num_simulations() -> u32 {
    DEFAULTS.mcts.num_simulations
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn decision_exploration() -> f64 {
    DEFAULTS.mcts.decision_exploration
}

// Arena
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn black_agent() -> &'static str {
    &DEFAULTS.arena.black
}
pub fn white_agent() -> &'static str {
    &DEFAULTS.arena.white
}

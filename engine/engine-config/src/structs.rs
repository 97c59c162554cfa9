//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_width() -> usize {
    defaults::board_width()
}
fn d_height() -> usize {
    defaults::board_height()
}
fn d_num_sims() -> u32 {
    defaults::num_simulations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_decision_exploration() -> f64 {
    defaults::decision_exploration()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_black() -> String {
    defaults::black_agent().into()
}
fn d_white() -> String {
    defaults::white_agent().into()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Board dimensions
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BoardConfig {
    #[serde(default = "d_width")]
    pub width: usize,
    #[serde(default = "d_height")]
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: defaults::board_width(),
            height: defaults::board_height(),
        }
    }
}

/// MCTS search settings
///
/// `exploration` weights the UCT uncertainty term while descending the tree;
/// `decision_exploration` is used once per move to pick the final root child
/// and should stay near zero.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_num_sims")]
    pub num_simulations: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_decision_exploration")]
    pub decision_exploration: f64,
    /// Fixed seed for reproducible searches (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: defaults::num_simulations(),
            exploration: defaults::exploration(),
            decision_exploration: defaults::decision_exploration(),
            seed: None,
        }
    }
}

/// Match settings: number of games and agent argument strings per side
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    #[serde(default = "d_black")]
    pub black: String,
    #[serde(default = "d_white")]
    pub white: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            black: defaults::black_agent().into(),
            white: defaults::white_agent().into(),
        }
    }
}

//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the engine components and the arena binary.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`NOGO_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! NOGO_<SECTION>_<KEY>=value
//!
//! Examples:
//!     NOGO_COMMON_LOG_LEVEL=debug
//!     NOGO_BOARD_WIDTH=7
//!     NOGO_MCTS_NUM_SIMULATIONS=5000
//!     NOGO_MCTS_SEED=42
//!     NOGO_ARENA_WHITE="name=mcts role=white T=200"
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

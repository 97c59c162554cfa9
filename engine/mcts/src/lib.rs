//! Monte Carlo Tree Search (MCTS) with UCT selection and random playouts.
//!
//! This crate chooses a move for the side to move in any position
//! implementing [`engine_core::Position`]. It is written with NoGo in mind,
//! where the side left without a legal placement loses.
//!
//! # Overview
//!
//! Each iteration consists of four phases:
//!
//! 1. **Selection**: Descend from the root with UCT, replaying each chosen
//!    child's move on a copy of the root position
//! 2. **Expansion**: On a node's first visit, add one child per legal
//!    placement (in shuffled order) and continue from the first child
//! 3. **Simulation**: Play uniformly random legal placements until the side
//!    to move is stuck
//! 4. **Backpropagation**: Credit the binary reward (1 if the opponent of the
//!    searching side got stuck) to every node up to the root
//!
//! After the budget is spent the root child with the best UCT score under a
//! near-zero exploration constant is played. A root without legal placements
//! yields [`Action::NoMove`](engine_core::Action::NoMove).
//!
//! # Usage
//!
//! ```rust
//! use games_nogo::Board;
//! use mcts::{run_mcts, MctsConfig};
//!
//! let board = Board::with_size(3, 3).unwrap();
//! let config = MctsConfig::default().with_simulations(200).with_seed(42);
//! let mut rng = config.rng();
//!
//! let result = run_mcts(&board, config, &mut rng).unwrap();
//! assert!(result.action.place().is_some());
//! assert_eq!(result.simulations, 200);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_simulations`: Iterations per decision (default: 1000)
//! - `exploration`: UCT constant while descending (default: sqrt 2)
//! - `decision_exploration`: UCT constant for the final pick (default: 1e-12)
//! - `seed`: Seed for the search RNG (default: OS entropy)
//!
//! # Architecture
//!
//! ```text
//! MctsSearch
//!   ├── SearchTree    arena of SearchNode, addressed by NodeId
//!   ├── root Position cloned per iteration, walked with the tree
//!   └── ChaCha20Rng   borrowed; shuffles expansions, drives playouts
//! ```

pub mod config;
pub mod node;
pub mod playout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use playout::{random_playout, PlayoutResult};
pub use search::{run_mcts, IterationOutcome, MctsSearch, SearchError, SearchResult};
pub use tree::{SearchTree, TreeStats};

//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Descend from the root with UCT until a childless node
//! 2. Expansion: On a node's first visit, add one child per legal placement
//!    and commit to the first one created
//! 3. Simulation: Random playout to the end of the game
//! 4. Backpropagation: Add the binary reward to every node up to the root

use engine_core::{Action, Place, Position, Side};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::playout::random_playout;
use crate::tree::SearchTree;

/// Errors that can occur during MCTS search.
///
/// Both variants are invariant violations and are never produced while the
/// tree and the position are driven by this module alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Node {0:?} is not in the search tree")]
    UnknownNode(NodeId),

    #[error("Stored move {place} of node {node:?} was rejected on replay")]
    IllegalReplay { node: NodeId, place: Place },
}

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Move to play, or `Action::NoMove` when the root has no legal placement
    pub action: Action,

    /// Number of iterations performed (equals the root's visit count)
    pub simulations: u32,

    /// Mean reward at the root
    pub root_win_rate: f64,

    /// Visits of the chosen child (0 for `NoMove`)
    pub chosen_visits: u32,

    /// Number of nodes in the tree
    pub tree_size: usize,
}

/// What a single iteration did, mostly for tests and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationOutcome {
    /// Childless node reached by selection
    pub leaf: NodeId,

    /// Node the playout started from and backpropagation began at
    pub evaluated: NodeId,

    /// Whether `leaf` was expanded during this iteration
    pub expanded: bool,

    /// Binary reward credited along the path
    pub reward: u32,

    /// Length of the random playout
    pub plies: u32,
}

/// MCTS search state for one decision.
///
/// The tree is built fresh from `root_position` and dropped with the search.
#[derive(Debug)]
pub struct MctsSearch<P: Position> {
    tree: SearchTree,
    root_position: P,
    side: Side,
    config: MctsConfig,
}

impl<P: Position> MctsSearch<P> {
    /// Create a new MCTS search from the given position.
    ///
    /// The searching side is the side to move in `position`.
    pub fn new(position: &P, config: MctsConfig) -> Self {
        let side = position.side_to_move();

        Self {
            tree: SearchTree::new(side.opponent()),
            root_position: position.clone(),
            side,
            config,
        }
    }

    /// Run the MCTS search for the configured number of simulations, then
    /// pick the move.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        for _ in 0..self.config.num_simulations {
            self.iterate(rng)?;
        }

        let result = self.decide();

        debug!(
            side = %self.side,
            action = %result.action,
            simulations = result.simulations,
            root_win_rate = result.root_win_rate,
            chosen_visits = result.chosen_visits,
            tree_size = result.tree_size,
            "MCTS search complete"
        );

        Ok(result)
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    pub fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<IterationOutcome, SearchError> {
        // Selection: walk tree and position together
        let mut position = self.root_position.clone();
        let leaf = self.select(&mut position)?;

        // Expansion: only on the first visit
        let mut evaluated = leaf;
        let expanded = self.tree.get(leaf).is_unvisited();
        if expanded {
            if let Some(first) = self.expand(leaf, &position, rng) {
                self.replay(first, &mut position)?;
                evaluated = first;
            }
        }

        // Simulation
        let playout = random_playout(&mut position, rng);
        let reward = playout.reward_for(self.side);

        // Backpropagation
        let updated = self.tree.backpropagate(evaluated, reward)?;

        trace!(
            leaf = leaf.0,
            evaluated = evaluated.0,
            expanded,
            path_len = updated,
            plies = playout.plies,
            reward,
            "MCTS iteration complete"
        );

        Ok(IterationOutcome {
            leaf,
            evaluated,
            expanded,
            reward,
            plies: playout.plies,
        })
    }

    /// Descend from the root to a childless node, applying each chosen
    /// child's move to `position`.
    fn select(&self, position: &mut P) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();

        while let Some(child_id) = self.tree.select_child(current, self.config.exploration) {
            self.replay(child_id, position)?;
            current = child_id;
        }

        Ok(current)
    }

    /// Add one child per legal placement of the side to move at `node_id`,
    /// in an order shuffled with `rng`. Returns the first child created, or
    /// None when the position has no legal placement.
    fn expand(&mut self, node_id: NodeId, position: &P, rng: &mut ChaCha20Rng) -> Option<NodeId> {
        let mover = !self.tree.get(node_id).mover;

        let mut cells: Vec<u16> = (0..position.num_cells() as u16).collect();
        cells.shuffle(rng);

        let mut first = None;
        for cell in cells {
            let place = Place::new(cell, mover);
            if !position.is_legal(place) {
                continue;
            }

            let child_id = self.tree.add_child(node_id, place, mover);
            if first.is_none() {
                first = Some(child_id);
            }
        }

        first
    }

    /// Apply the move stored on `node_id` to `position`.
    fn replay(&self, node_id: NodeId, position: &mut P) -> Result<(), SearchError> {
        let node = self
            .tree
            .try_get(node_id)
            .ok_or(SearchError::UnknownNode(node_id))?;

        // Only the root has no move, and the root is never replayed
        let Some(place) = node.place else {
            return Ok(());
        };

        if position.apply(place).is_legal() {
            Ok(())
        } else {
            Err(SearchError::IllegalReplay {
                node: node_id,
                place,
            })
        }
    }

    /// Pick the root child with the decision constant and summarize the root.
    pub fn decide(&self) -> SearchResult {
        let root_id = self.tree.root();
        let root = self.tree.get(root_id);

        let chosen = self
            .tree
            .select_child(root_id, self.config.decision_exploration)
            .map(|id| self.tree.get(id));

        SearchResult {
            action: chosen
                .and_then(|child| child.place)
                .map(Action::Place)
                .unwrap_or(Action::NoMove),
            simulations: root.visit_count,
            root_win_rate: root.mean_reward(),
            chosen_visits: chosen.map(|child| child.visit_count).unwrap_or(0),
            tree_size: self.tree.len(),
        }
    }

    /// Side the search plays for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<P: Position>(
    position: &P,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult, SearchError> {
    let mut search = MctsSearch::new(position, config);
    search.run(rng)
}

//! MCTS tree node representation.
//!
//! Each node represents the position reached by playing `place` from the
//! parent's position. Nodes store the visit statistics used by UCT selection.

use engine_core::{Place, Side};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Placement that led to this node from parent (None for root)
    pub place: Option<Place>,

    /// Side that made `place`. The side to move at this node is the opponent.
    pub mover: Side,

    /// Number of simulations that passed through this node
    pub visit_count: u32,

    /// Sum of binary playout rewards credited to this node.
    /// Never exceeds `visit_count`.
    pub reward_sum: u32,

    /// Children in creation order. Empty until the node is expanded, and
    /// forever for terminal nodes.
    pub children: Vec<NodeId>,
}

impl SearchNode {
    /// Create a new root node.
    ///
    /// `mover` is the side that is *not* about to move, so the first layer of
    /// children holds moves by the searching side.
    pub fn new_root(mover: Side) -> Self {
        Self {
            parent: NodeId::NONE,
            place: None,
            mover,
            visit_count: 0,
            reward_sum: 0,
            children: Vec::new(),
        }
    }

    /// Create a new child node for a placement made by `mover`.
    pub fn new_child(parent: NodeId, place: Place, mover: Side) -> Self {
        Self {
            parent,
            place: Some(place),
            mover,
            visit_count: 0,
            reward_sum: 0,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_unvisited(&self) -> bool {
        self.visit_count == 0
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Mean reward w/n, 0.0 if never visited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.reward_sum as f64 / self.visit_count as f64
        }
    }

    /// UCT score for child selection.
    /// UCT = w/n + c * sqrt(ln(N_root) / n), +inf when unvisited.
    ///
    /// Takes pre-computed ln(N_root) so that comparing siblings does not
    /// recompute the logarithm per child.
    #[inline]
    pub fn uct_score(&self, ln_root_visits: f64, exploration: f64) -> f64 {
        if self.is_unvisited() {
            return f64::INFINITY;
        }
        let n = self.visit_count as f64;
        self.mean_reward() + exploration * (ln_root_visits / n).sqrt()
    }
}

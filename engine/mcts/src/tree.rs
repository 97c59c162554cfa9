//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! The arena is the only owner of nodes: parents hold child ids and children
//! hold a parent id, so dropping the tree releases every node exactly once.

use engine_core::{Place, Side};

use crate::node::{NodeId, SearchNode};
use crate::search::SearchError;

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct SearchTree {
    /// Arena storing all nodes
    nodes: Vec<SearchNode>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl SearchTree {
    /// Create a new tree whose root was "reached" by a move of `root_mover`.
    pub fn new(root_mover: Side) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_mover)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Look up a node that may not exist (e.g. `NodeId::NONE`).
    #[inline]
    pub fn try_get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.index())
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Select the child of `node_id` with the highest UCT score.
    ///
    /// The logarithm term uses the root's visit count. Unvisited children
    /// score +inf, and the first child reaching the maximum wins, so the
    /// result is deterministic for a fixed child order.
    /// Returns None if the node has no children.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let root_visits = self.get(self.root).visit_count.max(1);
        // Pre-compute ln once instead of per-child comparison
        let ln_root_visits = (root_visits as f64).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &self.get(node_id).children {
            let score = self.get(child_id).uct_score(ln_root_visits, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, place: Place, mover: Side) -> NodeId {
        let child_id = self.allocate(SearchNode::new_child(parent_id, place, mover));

        // Add to parent's children
        self.get_mut(parent_id).children.push(child_id);

        child_id
    }

    /// Backpropagate a playout reward from `start` up to the root inclusive.
    ///
    /// Every node on the path gets one more visit and the same reward.
    /// Returns the number of nodes updated.
    pub fn backpropagate(&mut self, start: NodeId, reward: u32) -> Result<usize, SearchError> {
        if self.try_get(start).is_none() {
            return Err(SearchError::UnknownNode(start));
        }

        let mut current_id = start;
        let mut updated = 0;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visit_count += 1;
            node.reward_sum += reward;
            updated += 1;

            current_id = node.parent;
        }

        Ok(updated)
    }

    /// Node ids from `id` up to the root inclusive.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(node) = self.try_get(current) {
            path.push(current);
            current = node.parent;
        }
        path
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_win_rate: root.mean_reward(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_win_rate: f64,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(cell: u16, side: Side) -> Place {
        Place::new(cell, side)
    }

    #[test]
    fn test_new_tree() {
        let tree = SearchTree::new(Side::White);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.parent.is_none());
        assert_eq!(root.mover, Side::White);
    }

    #[test]
    fn test_add_child() {
        let mut tree = SearchTree::new(Side::White);

        let child_id = tree.add_child(tree.root(), place(5, Side::Black), Side::Black);

        assert_eq!(tree.len(), 2);
        assert_eq!(child_id, NodeId(1));

        let root = tree.get(tree.root());
        assert_eq!(root.children, vec![NodeId(1)]);

        let child = tree.get(child_id);
        assert_eq!(child.parent, tree.root());
        assert_eq!(child.place, Some(place(5, Side::Black)));
        assert_eq!(child.mover, Side::Black);
    }

    #[test]
    fn test_backpropagate() {
        let mut tree = SearchTree::new(Side::White);

        // Create a chain: root -> child -> grandchild, plus an off-path sibling
        let child_id = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        let sibling_id = tree.add_child(tree.root(), place(1, Side::Black), Side::Black);
        let grandchild_id = tree.add_child(child_id, place(2, Side::White), Side::White);

        let updated = tree.backpropagate(grandchild_id, 1).unwrap();
        assert_eq!(updated, 3);

        // Same reward at every level
        for id in [grandchild_id, child_id, tree.root()] {
            assert_eq!(tree.get(id).visit_count, 1);
            assert_eq!(tree.get(id).reward_sum, 1);
        }

        // Off-path node untouched
        assert!(tree.get(sibling_id).is_unvisited());
        assert_eq!(tree.get(sibling_id).reward_sum, 0);

        tree.backpropagate(child_id, 0).unwrap();
        assert_eq!(tree.get(child_id).visit_count, 2);
        assert_eq!(tree.get(child_id).reward_sum, 1);
        assert_eq!(tree.get(grandchild_id).visit_count, 1);
    }

    #[test]
    fn test_backpropagate_unknown_node() {
        let mut tree = SearchTree::new(Side::White);

        let err = tree.backpropagate(NodeId::NONE, 1).unwrap_err();
        assert!(matches!(err, SearchError::UnknownNode(id) if id == NodeId::NONE));

        // Nothing was touched
        assert!(tree.get(tree.root()).is_unvisited());
    }

    #[test]
    fn test_select_child_prefers_unvisited() {
        let mut tree = SearchTree::new(Side::White);

        let a = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        let b = tree.add_child(tree.root(), place(1, Side::Black), Side::Black);

        // `a` has a perfect record, `b` was never tried
        tree.get_mut(tree.root()).visit_count = 50;
        tree.get_mut(a).visit_count = 50;
        tree.get_mut(a).reward_sum = 50;

        assert_eq!(tree.select_child(tree.root(), 100.0), Some(b));
        assert_eq!(tree.select_child(tree.root(), 0.0), Some(b));
    }

    #[test]
    fn test_select_child_first_max_wins() {
        let mut tree = SearchTree::new(Side::White);

        let a = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        let b = tree.add_child(tree.root(), place(1, Side::Black), Side::Black);

        // All unvisited: tie on +inf, first child wins
        assert_eq!(tree.select_child(tree.root(), 1.0), Some(a));

        // Identical statistics: still the first child
        tree.get_mut(tree.root()).visit_count = 4;
        for id in [a, b] {
            tree.get_mut(id).visit_count = 2;
            tree.get_mut(id).reward_sum = 1;
        }
        assert_eq!(tree.select_child(tree.root(), 1.0), Some(a));
    }

    #[test]
    fn test_select_child_uses_exploration() {
        let mut tree = SearchTree::new(Side::White);

        let a = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        let b = tree.add_child(tree.root(), place(1, Side::Black), Side::Black);

        tree.get_mut(tree.root()).visit_count = 100;
        // a: 60% over 90 visits, b: 50% over 10 visits
        tree.get_mut(a).visit_count = 90;
        tree.get_mut(a).reward_sum = 54;
        tree.get_mut(b).visit_count = 10;
        tree.get_mut(b).reward_sum = 5;

        // Greedy picks the better win rate, heavy exploration the less tried
        assert_eq!(tree.select_child(tree.root(), 1e-12), Some(a));
        assert_eq!(tree.select_child(tree.root(), 2.0), Some(b));
    }

    #[test]
    fn test_select_child_no_children() {
        let tree = SearchTree::new(Side::White);
        assert_eq!(tree.select_child(tree.root(), 1.0), None);
    }

    #[test]
    fn test_path_to_root() {
        let mut tree = SearchTree::new(Side::White);
        let child = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        let grandchild = tree.add_child(child, place(1, Side::White), Side::White);

        assert_eq!(
            tree.path_to_root(grandchild),
            vec![grandchild, child, tree.root()]
        );
        assert!(tree.path_to_root(NodeId::NONE).is_empty());
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = SearchTree::new(Side::White);
        let child = tree.add_child(tree.root(), place(0, Side::Black), Side::Black);
        tree.add_child(child, place(1, Side::White), Side::White);
        tree.backpropagate(child, 1).unwrap();

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_visits, 1);
        assert!((stats.root_win_rate - 1.0).abs() < 1e-12);
    }
}

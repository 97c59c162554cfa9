//! Random playouts used to score freshly reached tree nodes.
//!
//! A playout plays uniformly random legal placements, recomputing the legal
//! set after every ply, until the side to move has nothing left to play. In
//! NoGo that side has lost.

use engine_core::{Position, Side};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Outcome of one random playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutResult {
    /// Side left without a legal placement (the loser).
    pub stuck: Side,

    /// Number of placements played before the game ended.
    pub plies: u32,
}

impl PlayoutResult {
    /// Binary reward for the searching side: 1 when the opponent ran out of
    /// moves, 0 when the searching side did.
    #[inline]
    pub fn reward_for(&self, searching: Side) -> u32 {
        u32::from(self.stuck != searching)
    }
}

/// Play random legal placements on `position` until the side to move is stuck.
///
/// The position is consumed in place; callers pass a scratch copy.
pub fn random_playout<P: Position>(position: &mut P, rng: &mut ChaCha20Rng) -> PlayoutResult {
    let mut plies = 0;

    while let Some(place) = position.legal_moves().choose(rng).copied() {
        // Legal by construction
        let outcome = position.apply(place);
        debug_assert!(outcome.is_legal());
        plies += 1;
    }

    PlayoutResult {
        stuck: position.side_to_move(),
        plies,
    }
}

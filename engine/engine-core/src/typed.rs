//! Typed Position trait the search engine drives
//!
//! A position is a snapshot of a board plus whose turn it is. The search only
//! ever mutates private copies, so implementations should be cheap to clone.

use crate::action::{Place, PlaceOutcome, Side};

/// Rules interface for two-player placement games.
///
/// Every cell of the board is a candidate move target, so the set of
/// candidate placements for a side is `0..num_cells()`.
///
/// # Example
///
/// ```rust
/// use engine_core::{Place, PlaceOutcome, Position, Side};
///
/// /// A strip of cells where each side may only claim empty cells.
/// #[derive(Debug, Clone)]
/// struct Strip {
///     cells: Vec<Option<Side>>,
///     to_move: Side,
/// }
///
/// impl Position for Strip {
///     fn num_cells(&self) -> usize {
///         self.cells.len()
///     }
///
///     fn side_to_move(&self) -> Side {
///         self.to_move
///     }
///
///     fn apply(&mut self, place: Place) -> PlaceOutcome {
///         let cell = place.cell as usize;
///         if place.side != self.to_move || self.cells.get(cell) != Some(&None) {
///             return PlaceOutcome::Illegal;
///         }
///         self.cells[cell] = Some(place.side);
///         self.to_move = !self.to_move;
///         PlaceOutcome::Legal
///     }
/// }
///
/// let strip = Strip { cells: vec![None, Some(Side::White), None], to_move: Side::Black };
/// assert_eq!(strip.legal_moves().len(), 2);
/// assert!(strip.has_legal_move());
/// ```
pub trait Position: Clone + std::fmt::Debug {
    /// Number of cells on the board (candidate move targets per side).
    fn num_cells(&self) -> usize;

    /// Side whose turn it is in this position.
    fn side_to_move(&self) -> Side;

    /// Attempt a placement.
    ///
    /// Mutates only `self`. An illegal attempt must leave the position
    /// unchanged.
    fn apply(&mut self, place: Place) -> PlaceOutcome;

    /// Check a placement against a private copy without touching `self`.
    fn is_legal(&self, place: Place) -> bool {
        let mut after = self.clone();
        after.apply(place).is_legal()
    }

    /// Every legal placement for the side to move, in cell order.
    fn legal_moves(&self) -> Vec<Place> {
        let side = self.side_to_move();
        (0..self.num_cells())
            .map(|cell| Place::new(cell as u16, side))
            .filter(|place| self.is_legal(*place))
            .collect()
    }

    /// Whether the side to move has at least one legal placement.
    fn has_legal_move(&self) -> bool {
        let side = self.side_to_move();
        (0..self.num_cells()).any(|cell| self.is_legal(Place::new(cell as u16, side)))
    }
}

//! Core traits and types for the NoGo engine
//!
//! This crate provides the fundamental abstractions shared by the rules
//! implementation, the search and the agents:
//! - `Side`: The two players of a placement game
//! - `Place` / `Action`: Move encoding, including the "no legal move" sentinel
//! - `Position`: Rules interface the search drives (legality, turn tracking)

pub mod action;
pub mod typed;

// Re-export main types for convenience
pub use action::{Action, Place, PlaceOutcome, Side};
pub use typed::Position;

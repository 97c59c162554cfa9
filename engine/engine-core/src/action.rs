//! Move encoding for two-player placement games.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

// flip the side, i.e. Black -> White and White -> Black
impl std::ops::Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

/// Error returned when a side name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown side '{0}', expected 'black' or 'white'")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// A placement of a stone by `side` on board cell `cell` (row-major index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Place {
    pub cell: u16,
    pub side: Side,
}

impl Place {
    pub fn new(cell: u16, side: Side) -> Self {
        Self { cell, side }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.side, self.cell)
    }
}

/// Outcome of attempting a placement on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Legal,
    Illegal,
}

impl PlaceOutcome {
    #[inline]
    pub fn is_legal(self) -> bool {
        self == PlaceOutcome::Legal
    }
}

/// Action chosen by an agent.
///
/// `NoMove` is the sentinel returned when the side to move has no legal
/// placement; it is data, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Place(Place),
    #[default]
    NoMove,
}

impl Action {
    /// The placement carried by this action, if any.
    pub fn place(&self) -> Option<Place> {
        match self {
            Action::Place(place) => Some(*place),
            Action::NoMove => None,
        }
    }

    pub fn is_no_move(&self) -> bool {
        matches!(self, Action::NoMove)
    }
}

impl From<Place> for Action {
    fn from(place: Place) -> Self {
        Action::Place(place)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(place) => write!(f, "{}", place),
            Action::NoMove => write!(f, "no-move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_flip() {
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!!Side::Black, Side::Black);
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("black".parse::<Side>(), Ok(Side::Black));
        assert_eq!("white".parse::<Side>(), Ok(Side::White));

        let err = "unknown".parse::<Side>().unwrap_err();
        assert_eq!(err, ParseSideError("unknown".to_string()));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_action_sentinel() {
        let action = Action::default();
        assert!(action.is_no_move());
        assert_eq!(action.place(), None);
        assert_eq!(action.to_string(), "no-move");
    }

    #[test]
    fn test_action_from_place() {
        let place = Place::new(7, Side::White);
        let action: Action = place.into();
        assert_eq!(action.place(), Some(place));
        assert_eq!(action.to_string(), "white@7");
    }
}

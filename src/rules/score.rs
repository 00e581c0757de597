//! Piece counting and game outcome

use std::fmt;

use crate::board::{Board, Side};

/// Piece counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Count for one side
    #[inline]
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Higher count wins; equal counts tie.
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Outcome::Winner(Side::Black),
            Ordering::Less => Outcome::Winner(Side::White),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Count pieces on the board
#[inline]
pub fn score(board: &Board) -> Score {
    Score {
        black: board.count(Side::Black),
        white: board.count(Side::White),
    }
}

//! Error types for the Reversi engine
//!
//! All errors are synchronous return values. Illegal moves are recoverable
//! (the caller re-prompts); playing on a finished game is a caller bug.

use std::fmt;

use thiserror::Error;

use crate::board::Pos;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Target cell already holds a piece
    Occupied,
    /// Placing there would not flip any opponent piece
    NoFlips,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::Occupied => write!(f, "cell is occupied"),
            InvalidMoveReason::NoFlips => write!(f, "no pieces would be flipped"),
        }
    }
}

/// Errors that can occur in the Reversi engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move is not legal for the side to move
    #[error("Invalid move at {pos}: {reason}")]
    InvalidMove {
        pos: Pos,
        reason: InvalidMoveReason,
    },

    /// Operation requires a game in progress
    #[error("Game is already finished")]
    IllegalState,

    /// Coordinates outside the 8x8 board
    #[error("Position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Unknown difficulty tier name
    #[error("Unknown difficulty: {0} (expected 1-3, random, greedy or minimax)")]
    InvalidDifficulty(String),
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;

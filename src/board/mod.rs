//! Board representation for Reversi

pub mod bitboard;
pub mod board;


use std::fmt;

use crate::error::{GameError, GameResult};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The two players. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Side occupying this cell, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
            Cell::Empty => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(row: i32, col: i32) -> GameResult<Self> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour one step along `(dr, dc)`, or `None` past the edge.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Self::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

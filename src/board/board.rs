//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, BOARD_SIZE};

/// 8x8 Reversi board.
///
/// Each side's pieces live in their own bitboard; the two sets are always
/// disjoint, so every cell has exactly one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    /// Standard starting position: four centre pieces on the diagonals.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Pos::new(3, 3), Side::White);
        board.place(Pos::new(3, 4), Side::Black);
        board.place(Pos::new(4, 3), Side::Black);
        board.place(Pos::new(4, 4), Side::White);
        board
    }

    /// Board with no pieces at all (for setting up positions)
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a piece of `side` on `pos`, replacing whatever was there.
    /// Game moves go through [`crate::rules::apply_move`].
    #[inline]
    pub fn place(&mut self, pos: Pos, side: Side) {
        match side {
            Side::Black => {
                self.white.clear(pos);
                self.black.set(pos);
            }
            Side::White => {
                self.black.clear(pos);
                self.white.set(pos);
            }
        }
    }

    /// Remove a piece
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, side: Side) -> &Bitboard {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    /// Number of pieces of a side
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.stones(side).count()
    }

    /// Total pieces on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Bitboard of unoccupied cells
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        Bitboard::from_bits(!(self.black.bits() | self.white.bits()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

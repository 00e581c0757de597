//! Positional weight table
//!
//! Corners cannot be flipped once taken, so they score highest. The cells
//! touching a corner hand it to the opponent and score lowest.

use crate::board::{Bitboard, Pos, BOARD_SIZE};

/// Weight of each cell, row-major
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Weight applied to the mobility difference
pub const MOBILITY_WEIGHT: i32 = 10;

#[inline]
pub fn weight(pos: Pos) -> i32 {
    WEIGHTS[pos.row as usize][pos.col as usize]
}

/// Sum of weights over a set of cells
pub fn positional_sum(cells: &Bitboard) -> i32 {
    cells.iter_ones().map(weight).sum()
}

//! Heuristic evaluation of Reversi positions
//!
//! The score combines:
//! - Positional weights of occupied cells
//! - Mobility (number of legal moves) for both sides

use crate::board::{Board, Side};
use crate::rules::mobility;

use super::weights::{positional_sum, MOBILITY_WEIGHT};

/// Evaluate the board from the perspective of `side`.
///
/// Positive values favour `side`. The result is antisymmetric:
/// `evaluate(b, Black) == -evaluate(b, White)`.
///
/// # Arguments
/// * `board` - The position to score
/// * `side` - The side to score for
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let opponent = side.opponent();

    let position_score =
        positional_sum(board.stones(side)) - positional_sum(board.stones(opponent));

    let my_moves = mobility(board, side) as i32;
    let opp_moves = mobility(board, opponent) as i32;

    position_score + MOBILITY_WEIGHT * (my_moves - opp_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::apply_move;

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Side::Black), 0);
        assert_eq!(evaluate(&board, Side::White), 0);
    }

    #[test]
    fn test_after_opening_move() {
        let mut board = Board::new();
        apply_move(&mut board, Pos::new(2, 3), Side::Black).unwrap();
        // Black: (2,3)=3 (3,3)=3 (3,4)=3 (4,3)=3 -> 12, White: (4,4)=3
        // Mobility: Black 3, White 3
        assert_eq!(evaluate(&board, Side::Black), 9);
        assert_eq!(evaluate(&board, Side::White), -9);
    }

    #[test]
    fn test_corner_dominates() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Side::White);
        board.place(Pos::new(1, 1), Side::Black);
        // White can take the X-square via (2,2); Black has nothing
        assert_eq!(evaluate(&board, Side::White), 120 - (-40) + 10);
        assert_eq!(evaluate(&board, Side::Black), -170);
    }

    #[test]
    fn test_mobility_term() {
        let mut board = Board::empty();
        board.place(Pos::new(3, 3), Side::Black);
        board.place(Pos::new(3, 4), Side::White);
        // Black can play (3,5); White can play (3,2)
        assert_eq!(mobility(&board, Side::Black), 1);
        assert_eq!(mobility(&board, Side::White), 1);
        assert_eq!(evaluate(&board, Side::Black), 0);

        // A lone corner piece cannot be flanked; each white neighbour can be
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Side::Black);
        board.place(Pos::new(0, 1), Side::White);
        board.place(Pos::new(1, 0), Side::White);
        board.place(Pos::new(1, 1), Side::White);
        assert_eq!(mobility(&board, Side::Black), 3);
        assert_eq!(mobility(&board, Side::White), 0);
        // positional: 120 - (-20 - 20 - 40) = 200, mobility +30
        assert_eq!(evaluate(&board, Side::Black), 230);
        assert_eq!(evaluate(&board, Side::White), -230);
    }
}

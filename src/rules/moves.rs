//! Move generation and flip resolution
//!
//! A move at `pos` flips, in each of the 8 directions, the contiguous run of
//! opponent pieces starting next to `pos` provided the run is closed off by
//! one of the mover's own pieces. A run that reaches an empty cell or the
//! board edge first flips nothing.

use std::collections::BTreeMap;

use crate::board::{Board, Cell, Pos, Side};
use crate::error::{GameError, GameResult, InvalidMoveReason};

/// Direction vectors, in scan order: N, S, W, E, NW, NE, SW, SE
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Legal moves keyed by target cell, each with the pieces it would flip.
/// Iteration is row-major, which is the canonical move order.
pub type LegalMoves = BTreeMap<Pos, Vec<Pos>>;

/// Pieces that `side` would flip by playing at `pos`.
///
/// Returns an empty list when `pos` is occupied or the move flips nothing.
/// Does not modify the board.
pub fn flips_for(board: &Board, pos: Pos, side: Side) -> Vec<Pos> {
    let mut flips = Vec::new();
    if !board.is_empty(pos) {
        return flips;
    }

    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());

    for &(dr, dc) in &DIRECTIONS {
        let start = flips.len();
        let mut cur = pos.offset(dr, dc);
        let mut closed = false;

        while let Some(p) = cur {
            let cell = board.get(p);
            if cell == opp {
                flips.push(p);
                cur = p.offset(dr, dc);
            } else {
                closed = cell == own;
                break;
            }
        }

        if !closed {
            flips.truncate(start);
        }
    }

    flips
}

/// Whether `side` playing at `pos` flips at least one piece.
/// Same scan as [`flips_for`] without collecting the run.
fn flanks_any(board: &Board, pos: Pos, side: Side) -> bool {
    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let mut cur = pos.offset(dr, dc);
        let mut run = 0;
        while let Some(p) = cur {
            match board.get(p) {
                c if c == opp => {
                    run += 1;
                    cur = p.offset(dr, dc);
                }
                c if c == own => return run > 0,
                _ => return false,
            }
        }
        false
    })
}

/// All legal moves for `side`, with their flip lists.
pub fn legal_moves(board: &Board, side: Side) -> LegalMoves {
    let mut moves = LegalMoves::new();
    for pos in board.empty_cells().iter_ones() {
        let flips = flips_for(board, pos, side);
        if !flips.is_empty() {
            moves.insert(pos, flips);
        }
    }
    moves
}

/// Check if `pos` is a legal move for `side`
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, side: Side) -> bool {
    board.is_empty(pos) && flanks_any(board, pos, side)
}

/// Whether `side` has any legal move
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .empty_cells()
        .iter_ones()
        .any(|pos| flanks_any(board, pos, side))
}

/// Number of legal moves available to `side`
pub fn mobility(board: &Board, side: Side) -> usize {
    board
        .empty_cells()
        .iter_ones()
        .filter(|&pos| flanks_any(board, pos, side))
        .count()
}

/// Neither side can move: the game is over.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}

/// Play `side` at `pos`, flipping captured pieces.
///
/// Returns the flipped positions. On error the board is left untouched.
pub fn apply_move(board: &mut Board, pos: Pos, side: Side) -> GameResult<Vec<Pos>> {
    if !Pos::is_valid(pos.row as i32, pos.col as i32) {
        return Err(GameError::OutOfBounds {
            row: pos.row as i32,
            col: pos.col as i32,
        });
    }

    if !board.is_empty(pos) {
        return Err(GameError::InvalidMove {
            pos,
            reason: InvalidMoveReason::Occupied,
        });
    }

    let flips = flips_for(board, pos, side);
    if flips.is_empty() {
        return Err(GameError::InvalidMove {
            pos,
            reason: InvalidMoveReason::NoFlips,
        });
    }

    board.place(pos, side);
    for &p in &flips {
        board.place(p, side);
    }
    log::trace!("{} plays {} flipping {}", side, pos, flips.len());

    Ok(flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn opening_moves() -> Vec<Pos> {
        vec![
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(4, 5),
            Pos::new(5, 4),
        ]
    }

    #[test]
    fn test_initial_moves_for_black() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);

        assert_eq!(moves.keys().copied().collect::<Vec<_>>(), opening_moves());
        for flips in moves.values() {
            assert_eq!(flips.len(), 1);
        }
        assert_eq!(moves[&Pos::new(2, 3)], vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_initial_moves_for_white() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::White);
        let targets: Vec<Pos> = moves.keys().copied().collect();
        assert_eq!(
            targets,
            vec![
                Pos::new(2, 4),
                Pos::new(3, 5),
                Pos::new(4, 2),
                Pos::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_occupied_cell_has_no_flips() {
        let board = Board::new();
        assert!(flips_for(&board, Pos::new(3, 3), Side::Black).is_empty());
        assert!(!is_legal_move(&board, Pos::new(3, 3), Side::Black));
    }

    #[test]
    fn test_run_ending_in_empty_is_void() {
        // B W W . : playing left of B toward the whites gives nothing
        let mut board = Board::empty();
        board.place(Pos::new(0, 1), Side::White);
        board.place(Pos::new(0, 2), Side::White);
        board.place(Pos::new(0, 4), Side::Black);

        assert!(flips_for(&board, Pos::new(0, 0), Side::Black).is_empty());
        // Closing the gap at (0,3) is also void: whites sit on the other side.
        assert!(flips_for(&board, Pos::new(0, 3), Side::Black).is_empty());
    }

    #[test]
    fn test_run_reaching_edge_is_void() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 6), Side::White);
        board.place(Pos::new(0, 7), Side::White);
        assert!(flips_for(&board, Pos::new(0, 5), Side::Black).is_empty());
    }

    #[test]
    fn test_only_adjacent_run_is_flipped() {
        // . W W B W B  -> playing (0,0) as Black flips (0,1),(0,2) only
        let mut board = Board::empty();
        board.place(Pos::new(0, 1), Side::White);
        board.place(Pos::new(0, 2), Side::White);
        board.place(Pos::new(0, 3), Side::Black);
        board.place(Pos::new(0, 4), Side::White);
        board.place(Pos::new(0, 5), Side::Black);

        let flips = flips_for(&board, Pos::new(0, 0), Side::Black);
        assert_eq!(flips, vec![Pos::new(0, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn test_multiple_directions_combine() {
        // Corner move capturing along the row, column and diagonal
        let mut board = Board::empty();
        for i in 1..3u8 {
            board.place(Pos::new(0, i), Side::White);
            board.place(Pos::new(i, 0), Side::White);
            board.place(Pos::new(i, i), Side::White);
        }
        board.place(Pos::new(0, 3), Side::Black);
        board.place(Pos::new(3, 0), Side::Black);
        board.place(Pos::new(3, 3), Side::Black);

        let flips = flips_for(&board, Pos::new(0, 0), Side::Black);
        // S, E, SE in scan order
        assert_eq!(
            flips,
            vec![
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 1),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_apply_move_updates_counts() {
        let mut board = Board::new();
        let flips = apply_move(&mut board, Pos::new(2, 3), Side::Black).unwrap();

        assert_eq!(flips, vec![Pos::new(3, 3)]);
        assert_eq!(board.count(Side::Black), 4);
        assert_eq!(board.count(Side::White), 1);

        let replies: Vec<Pos> = legal_moves(&board, Side::White).keys().copied().collect();
        assert_eq!(
            replies,
            vec![Pos::new(2, 2), Pos::new(2, 4), Pos::new(4, 2)]
        );
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        let before = board;
        let err = apply_move(&mut board, Pos::new(3, 4), Side::Black).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                pos: Pos::new(3, 4),
                reason: InvalidMoveReason::Occupied
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_no_flips() {
        let mut board = Board::new();
        let before = board;
        let err = apply_move(&mut board, Pos::new(0, 0), Side::Black).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                pos: Pos::new(0, 0),
                reason: InvalidMoveReason::NoFlips
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_off_board() {
        let mut board = Board::new();
        let before = board;
        let err = apply_move(&mut board, Pos { row: 8, col: 3 }, Side::Black).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { row: 8, col: 3 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_mobility_matches_legal_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        let mut side = Side::Black;

        for _ in 0..30 {
            for s in [Side::Black, Side::White] {
                let moves = legal_moves(&board, s);
                assert_eq!(mobility(&board, s), moves.len());
                assert_eq!(has_legal_move(&board, s), !moves.is_empty());
            }

            let moves = legal_moves(&board, side);
            let targets: Vec<Pos> = moves.keys().copied().collect();
            match targets.choose(&mut rng) {
                Some(&pos) => {
                    apply_move(&mut board, pos, side).unwrap();
                }
                None if is_terminal(&board) => break,
                None => {}
            }
            side = side.opponent();
        }
    }

    #[test]
    fn test_random_play_invariants() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            let mut side = Side::Black;
            let mut plies = 0;

            while !is_terminal(&board) {
                let moves = legal_moves(&board, side);
                if moves.is_empty() {
                    side = side.opponent();
                    continue;
                }

                for (pos, flips) in &moves {
                    assert!(board.is_empty(*pos));
                    assert!(!flips.is_empty());
                    for f in flips {
                        assert_eq!(board.get(*f), Cell::from(side.opponent()));
                    }
                }

                let targets: Vec<Pos> = moves.keys().copied().collect();
                let pos = *targets.choose(&mut rng).unwrap();
                let own_before = board.count(side);
                let opp_before = board.count(side.opponent());
                let total_before = board.stone_count();

                let flips = apply_move(&mut board, pos, side).unwrap();
                let n = flips.len() as u32;
                assert_eq!(board.count(side), own_before + 1 + n);
                assert_eq!(board.count(side.opponent()), opp_before - n);
                assert_eq!(board.stone_count(), total_before + 1);

                plies += 1;
                side = side.opponent();
            }

            assert!(plies <= 60, "seed {seed}: {plies} plies");
            assert!(board.stone_count() <= 64);
        }
    }
}

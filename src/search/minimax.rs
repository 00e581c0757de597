//! Minimax search with alpha-beta pruning
//!
//! The tree is always scored from the AI's point of view: maximizing nodes
//! are the AI to move, minimizing nodes are its opponent. Each child is
//! searched on a private copy of the board, so the caller's board is never
//! touched.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Side};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new(Side::Black);
//! let result = searcher.search(&Board::new(), 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos, Side};
use crate::eval::evaluate;
use crate::rules::{has_legal_move, legal_moves};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Siblings skipped because `beta <= alpha`
    pub beta_cutoffs: u64,
    /// Nodes where the side to move had to pass
    pub pass_nodes: u64,
    /// Calls to the evaluation function
    pub leaf_evals: u64,
}

/// Score and move returned by one minimax node.
///
/// `best_move` is `None` at leaves and at pass nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub score: i32,
    pub best_move: Option<Pos>,
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` if the AI must pass
    pub best_move: Option<Pos>,
    /// Minimax value of the position for the AI
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher for a fixed AI side.
pub struct Searcher {
    ai: Side,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that plays (and scores for) `ai`.
    #[must_use]
    pub fn new(ai: Side) -> Self {
        Self {
            ai,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Search the position with the AI to move.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let root = self.minimax(board, depth, i32::MIN, i32::MAX, true);

        SearchResult {
            best_move: root.best_move,
            score: root.score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// One minimax node.
    ///
    /// Moves are tried in row-major order and only a strictly better score
    /// replaces the current best, so ties go to the first move seen.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> ScoredMove {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }

        let side = if maximizing { self.ai } else { self.ai.opponent() };
        let moves = legal_moves(board, side);

        if moves.is_empty() {
            if !has_legal_move(board, side.opponent()) {
                return self.leaf(board);
            }
            // Pass: same board, other side to move
            self.stats.pass_nodes += 1;
            let child = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            return ScoredMove {
                score: child.score,
                best_move: None,
            };
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for (&pos, flips) in &moves {
            let mut child_board = *board;
            child_board.place(pos, side);
            for &f in flips {
                child_board.place(f, side);
            }

            let child = self.minimax(&child_board, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if child.score > best_score {
                    best_score = child.score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if child.score < best_score {
                    best_score = child.score;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        ScoredMove {
            score: best_score,
            best_move,
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> ScoredMove {
        self.stats.leaf_evals += 1;
        ScoredMove {
            score: evaluate(board, self.ai),
            best_move: None,
        }
    }
}

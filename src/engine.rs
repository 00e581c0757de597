//! AI engine: move selection for the three difficulty tiers
//!
//! 1. **Random**: any legal move, uniformly
//! 2. **Greedy**: a move flipping the most pieces, ties broken uniformly
//! 3. **Minimax**: alpha-beta search at a fixed depth (2 plies by default)
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, Difficulty, Side};
//!
//! let mut engine = AIEngine::with_config(2, Some(42));
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::Black, Difficulty::Minimax);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Side};
use crate::error::GameError;
use crate::rules::legal_moves;
use crate::search::Searcher;

/// Default minimax depth in plies
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// AI strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move
    Random,
    /// Maximum flips
    Greedy,
    /// Alpha-beta search
    #[default]
    Minimax,
}

impl Difficulty {
    /// Numeric tier (1-3)
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Greedy => 2,
            Difficulty::Minimax => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Random),
            2 => Some(Difficulty::Greedy),
            3 => Some(Difficulty::Minimax),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Greedy => write!(f, "greedy"),
            Difficulty::Minimax => write!(f, "minimax"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "random" | "easy" => Ok(Difficulty::Random),
            "2" | "greedy" | "normal" => Ok(Difficulty::Greedy),
            "3" | "minimax" | "hard" => Ok(Difficulty::Minimax),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the side has to pass
    pub best_move: Option<Pos>,
    /// Score that selected the move: minimax value for search, flip count
    /// for greedy, 0 for random
    pub score: i32,
    /// Pieces the chosen move flips
    pub flips: usize,
    /// Tier that produced the move
    pub difficulty: Difficulty,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search nodes visited (0 for the non-search tiers)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(difficulty: Difficulty, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            flips: 0,
            difficulty,
            time_ms,
            nodes: 0,
        }
    }
}

/// Move selection engine.
///
/// Holds the random source for the random and greedy tiers and the depth
/// for the search tier. Seed it for reproducible games.
pub struct AIEngine {
    rng: StdRng,
    search_depth: u8,
}

impl AIEngine {
    /// Create an engine with default settings.
    ///
    /// Default configuration:
    /// - Search depth 2
    /// - RNG seeded from the OS
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    /// Create an engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `search_depth` - Minimax depth in plies for [`Difficulty::Minimax`];
    ///   raised to 1, since a depth-0 search never yields a move
    /// * `seed` - Fixed RNG seed, or `None` to seed from the OS
    ///
    /// # Example
    ///
    /// ```
    /// use reversi::AIEngine;
    ///
    /// let engine = AIEngine::with_config(4, Some(7));
    /// assert_eq!(engine.search_depth(), 4);
    /// ```
    #[must_use]
    pub fn with_config(search_depth: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            search_depth: search_depth.max(1),
        }
    }

    /// Choose a move for `side`.
    ///
    /// Returns `None` when `side` has no legal move and must pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side, difficulty: Difficulty) -> Option<Pos> {
        self.get_move_with_stats(board, side, difficulty).best_move
    }

    /// Choose a move for `side` and report how it was found.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        side: Side,
        difficulty: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();
        let moves = legal_moves(board, side);

        if moves.is_empty() {
            log::debug!("{} has no legal move", side);
            return MoveResult::pass(difficulty, start.elapsed().as_millis() as u64);
        }

        let targets: Vec<Pos> = moves.keys().copied().collect();

        let (best_move, score, nodes) = match difficulty {
            Difficulty::Random => (targets.choose(&mut self.rng).copied(), 0, 0),
            Difficulty::Greedy => {
                let max_flips = moves.values().map(Vec::len).max().unwrap_or(0);
                let best: Vec<Pos> = moves
                    .iter()
                    .filter(|(_, flips)| flips.len() == max_flips)
                    .map(|(&pos, _)| pos)
                    .collect();
                (best.choose(&mut self.rng).copied(), max_flips as i32, 0)
            }
            Difficulty::Minimax => {
                let mut searcher = Searcher::new(side);
                let result = searcher.search(board, self.search_depth);
                log::debug!(
                    "search depth {}: score {} nodes {} cutoffs {}",
                    result.depth,
                    result.score,
                    result.nodes,
                    result.stats.beta_cutoffs
                );
                (result.best_move, result.score, result.nodes)
            }
        };

        let flips = best_move
            .and_then(|pos| moves.get(&pos))
            .map_or(0, Vec::len);

        if let Some(pos) = best_move {
            log::debug!("{} ({}) chooses {} flipping {}", side, difficulty, pos, flips);
        }

        MoveResult {
            best_move,
            score,
            flips,
            difficulty,
            time_ms: start.elapsed().as_millis() as u64,
            nodes,
        }
    }

    /// Set the minimax depth (at least 1).
    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth.max(1);
    }

    /// Get the minimax depth.
    #[must_use]
    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Restart the random source from a fixed seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Search module for the Reversi AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning used by
//! the strongest difficulty tier.

pub mod minimax;

pub use minimax::{ScoredMove, SearchResult, SearchStats, Searcher};

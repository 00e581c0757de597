//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Flip computation along the 8 directions
//! - Legal move generation and move application
//! - Scoring and game outcome

pub mod moves;
pub mod score;

// Re-exports for convenient access
pub use moves::{
    apply_move, flips_for, has_legal_move, is_legal_move, is_terminal, legal_moves, mobility,
    LegalMoves, DIRECTIONS,
};
pub use score::{score, Outcome, Score};

//! Evaluation module for Reversi positions
//!
//! The evaluation considers:
//! - Positional weights (corners good, corner-adjacent cells bad)
//! - Mobility difference

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::{positional_sum, weight, MOBILITY_WEIGHT, WEIGHTS};

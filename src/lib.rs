//! Reversi (Othello) engine
//!
//! A renderer-agnostic Reversi engine:
//! - Standard 8x8 board, Black moves first
//! - A move must flank at least one line of opponent pieces
//! - A side with no legal move passes; the game ends when neither can move
//! - Higher piece count wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flip computation, legal moves, scoring
//! - [`eval`]: Positional weights and mobility evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Difficulty tiers and move selection
//! - [`game`]: Turn controller with pass and game-over handling
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, Difficulty, GameMode, GameState, Pos};
//!
//! let mut game = GameState::new(GameMode::PvE { human: reversi::Side::Black });
//! let mut engine = AIEngine::with_config(2, Some(1));
//!
//! // Human opens, AI answers
//! let outcome = game.play_move(Pos::new(2, 3)).unwrap();
//! assert_eq!(outcome.flips, vec![Pos::new(3, 3)]);
//!
//! if let Some(reply) = game.play_ai_turn(&mut engine, Difficulty::Minimax).unwrap() {
//!     println!("AI plays {} flipping {}", reply.pos, reply.flips.len());
//! }
//! println!("{}", game.score());
//! ```
//!
//! # Difficulty Tiers
//!
//! 1. Random legal move
//! 2. Greedy: most pieces flipped
//! 3. Minimax search (depth 2 by default) over positional weights and mobility

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, MoveResult};
pub use error::{GameError, GameResult, InvalidMoveReason};
pub use game::{GameEvent, GameMode, GameState, MoveOutcome, TurnState};
pub use rules::{LegalMoves, Outcome, Score};

//! Turn controller for a Reversi game
//!
//! `GameState` owns the live board and sequences turns:
//! - after a move the opponent moves next if it can
//! - otherwise the mover plays again and the opponent's pass is reported
//! - when neither side can move the game is finished and scored

use crate::board::{Board, Pos, Side};
use crate::engine::{AIEngine, Difficulty};
use crate::error::{GameError, GameResult};
use crate::rules::{self, apply_move, has_legal_move, LegalMoves, Outcome, Score};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Side },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Black }
    }
}

/// Whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Side),
    Finished,
}

/// Observable turn transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `Side` had no legal move and was skipped
    Pass(Side),
    /// Neither side can move
    GameOver { score: Score, outcome: Outcome },
}

/// Everything a caller needs to animate one accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub side: Side,
    /// Pieces flipped by the move, in scan order
    pub flips: Vec<Pos>,
    /// Passes or game end triggered by the move
    pub events: Vec<GameEvent>,
    /// Turn after pass/termination resolution
    pub turn: TurnState,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mode: GameMode,
    turn: TurnState,
    history: Vec<(Pos, Side)>,
    last_move: Option<Pos>,
    last_events: Vec<GameEvent>,
    start_board: Board,
    start_side: Side,
}

impl GameState {
    /// Start a game from the standard position with Black to move.
    pub fn new(mode: GameMode) -> Self {
        Self::from_position(Board::new(), Side::Black, mode)
    }

    /// Start a game from an arbitrary position.
    ///
    /// If `side` cannot move the turn is resolved immediately, and the
    /// resulting pass or game end is available from [`Self::last_events`].
    pub fn from_position(board: Board, side: Side, mode: GameMode) -> Self {
        let mut state = Self {
            board,
            mode,
            turn: TurnState::AwaitingMove(side),
            history: Vec::new(),
            last_move: None,
            last_events: Vec::new(),
            start_board: board,
            start_side: side,
        };
        state.last_events = state.resolve_turn(side);
        state
    }

    /// Back to the standard opening, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Side to move, or `None` once finished
    #[inline]
    pub fn side_to_move(&self) -> Option<Side> {
        match self.turn {
            TurnState::AwaitingMove(side) => Some(side),
            TurnState::Finished => None,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.turn == TurnState::Finished
    }

    /// Moves played so far
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Events from the most recent transition (move, undo or setup)
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match (self.mode, self.turn) {
            (GameMode::PvE { human }, TurnState::AwaitingMove(side)) => side == human,
            (GameMode::PvP, TurnState::AwaitingMove(_)) => true,
            (_, TurnState::Finished) => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match (self.mode, self.turn) {
            (GameMode::PvE { human }, TurnState::AwaitingMove(side)) => side != human,
            _ => false,
        }
    }

    /// Legal moves for the side to move (empty once finished)
    pub fn legal_moves(&self) -> LegalMoves {
        match self.turn {
            TurnState::AwaitingMove(side) => rules::legal_moves(&self.board, side),
            TurnState::Finished => LegalMoves::new(),
        }
    }

    #[inline]
    pub fn score(&self) -> Score {
        rules::score(&self.board)
    }

    /// Final result, only once the game is finished
    pub fn winner(&self) -> Option<Outcome> {
        self.is_finished().then(|| self.score().outcome())
    }

    /// Play `pos` for the side to move.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalState`] if the game is finished
    /// - [`GameError::OutOfBounds`] if `pos` is off the board
    /// - [`GameError::InvalidMove`] if `pos` is occupied or flips nothing;
    ///   the state is unchanged and the caller may try again
    pub fn play_move(&mut self, pos: Pos) -> GameResult<MoveOutcome> {
        let side = self.side_to_move().ok_or(GameError::IllegalState)?;
        let flips = apply_move(&mut self.board, pos, side)?;

        self.history.push((pos, side));
        self.last_move = Some(pos);
        self.last_events = self.resolve_turn(side.opponent());

        Ok(MoveOutcome {
            pos,
            side,
            flips,
            events: self.last_events.clone(),
            turn: self.turn,
        })
    }

    /// Pick a move for the side to move with the given tier.
    ///
    /// `Ok(None)` means the side must pass.
    pub fn choose_ai_move(
        &self,
        engine: &mut AIEngine,
        difficulty: Difficulty,
    ) -> GameResult<Option<Pos>> {
        let side = self.side_to_move().ok_or(GameError::IllegalState)?;
        Ok(engine.get_move(&self.board, side, difficulty))
    }

    /// Choose and play a move in one step.
    pub fn play_ai_turn(
        &mut self,
        engine: &mut AIEngine,
        difficulty: Difficulty,
    ) -> GameResult<Option<MoveOutcome>> {
        match self.choose_ai_move(engine, difficulty)? {
            Some(pos) => self.play_move(pos).map(Some),
            None => Ok(None),
        }
    }

    /// Take back moves by replaying history from the starting position.
    ///
    /// In PvE this goes back to the human's last turn (undoing the AI reply
    /// too); in PvP it undoes a single move. Returns the number of moves
    /// removed.
    pub fn undo(&mut self) -> GameResult<usize> {
        let mut moves = self.history.clone();
        let mut undone = 0;

        while moves.pop().is_some() {
            undone += 1;
            self.replay(&moves)?;

            let done = match self.mode {
                GameMode::PvP => true,
                GameMode::PvE { human } => {
                    moves.is_empty() || self.turn == TurnState::AwaitingMove(human)
                }
            };
            if done {
                break;
            }
        }

        if undone > 0 {
            log::debug!("undid {} move(s)", undone);
        }
        Ok(undone)
    }

    fn replay(&mut self, moves: &[(Pos, Side)]) -> GameResult<()> {
        self.board = self.start_board;
        self.history.clear();
        self.last_move = None;
        self.last_events = self.resolve_turn(self.start_side);

        for &(pos, _) in moves {
            self.play_move(pos)?;
        }
        Ok(())
    }

    /// Settle whose turn it is, offering it to `side` first.
    fn resolve_turn(&mut self, side: Side) -> Vec<GameEvent> {
        if has_legal_move(&self.board, side) {
            self.turn = TurnState::AwaitingMove(side);
            return Vec::new();
        }

        let other = side.opponent();
        if has_legal_move(&self.board, other) {
            log::info!("{} passes", side);
            self.turn = TurnState::AwaitingMove(other);
            return vec![GameEvent::Pass(side)];
        }

        let score = self.score();
        let outcome = score.outcome();
        log::info!("game over: {} ({})", score, outcome);
        self.turn = TurnState::Finished;
        vec![GameEvent::GameOver { score, outcome }]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

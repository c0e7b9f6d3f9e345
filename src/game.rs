//! Validated game engine over [`GameState`].

use crate::action::{Move, MoveError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns a [`GameState`] and mediates all mutation: moves are validated,
/// applied, and evaluated in one step, and a terminal state rejects any
/// further moves until [`Game::reset`].
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given position for the current player.
    ///
    /// On success the move is applied, the rules are evaluated, and the
    /// resulting status is returned. Rejected moves leave the game
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is terminal.
    /// - [`MoveError::CellOccupied`] when the cell is not empty.
    #[instrument(skip(self), fields(mark = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mv = Move::new(self.state.current_player(), pos);
        self.state.apply_move(mv)?;

        let status = rules::evaluate(self.state.board(), mv);
        if status.winner().is_some() {
            if let Some(line) = rules::winning_line(self.state.board(), mv) {
                self.state.set_winning_line(line);
            }
        }
        self.state.set_status(status);

        debug!(%mv, %status, move_count = self.state.move_count(), "Move applied");
        invariants::assert_invariants(&self.state);

        Ok(status)
    }

    /// Resets the game: empty board, empty history, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

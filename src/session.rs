//! Game sessions: turn coordination, scoring, and collaborator
//! notifications.

use crate::action::MoveError;
use crate::game::Game;
use crate::observer::{BoardRenderer, ScoreDisplay};
use crate::player::{Player, PlayerKind};
use crate::position::Position;
use crate::score::ScoreBoard;
use crate::types::{GameState, GameStatus, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

/// A single-session game loop between two players.
///
/// The session owns the game state, the score, and the random source, and
/// mediates all access to the board. External callers feed it move
/// requests; it validates them, evaluates the rules, and drives computer
/// turns synchronously until a human player is active or the game ends.
/// Renderer and score display collaborators are notified of every cell
/// change, terminal outcome, and score update.
///
/// Player one always holds X and moves first; player two holds O.
pub struct GameSession {
    game: Game,
    player_one: Player,
    player_two: Player,
    score: ScoreBoard,
    renderer: Box<dyn BoardRenderer>,
    score_display: Box<dyn ScoreDisplay>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a new session.
    ///
    /// If player one is a computer, its opening move (and any chained
    /// computer turns) is played before this returns.
    pub fn new(
        kind_one: PlayerKind,
        kind_two: PlayerKind,
        renderer: Box<dyn BoardRenderer>,
        score_display: Box<dyn ScoreDisplay>,
    ) -> Self {
        Self::with_rng(
            kind_one,
            kind_two,
            renderer,
            score_display,
            StdRng::from_entropy(),
        )
    }

    /// Creates a new session with a seeded random source.
    ///
    /// Computer move selection becomes deterministic for a given seed.
    pub fn with_seed(
        kind_one: PlayerKind,
        kind_two: PlayerKind,
        renderer: Box<dyn BoardRenderer>,
        score_display: Box<dyn ScoreDisplay>,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            kind_one,
            kind_two,
            renderer,
            score_display,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        kind_one: PlayerKind,
        kind_two: PlayerKind,
        renderer: Box<dyn BoardRenderer>,
        score_display: Box<dyn ScoreDisplay>,
        rng: StdRng,
    ) -> Self {
        info!(?kind_one, ?kind_two, "Creating game session");
        let mut session = Self {
            game: Game::new(),
            player_one: Player::new(Mark::X, 1, kind_one),
            player_two: Player::new(Mark::O, 2, kind_two),
            score: ScoreBoard::new(),
            renderer,
            score_display,
            rng,
        };
        session.run_computer_turns();
        session
    }

    /// Handles a move request for the active player, usually translated
    /// from a renderer click at `(row, column)`.
    ///
    /// On success the move is applied and any computer turns it unlocks
    /// are played synchronously before control returns; the status after
    /// all chained turns is returned. Rejected requests leave everything
    /// unchanged and are reported to the caller.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] when the coordinates miss the grid.
    /// - [`MoveError::CellOccupied`] when the cell is taken.
    /// - [`MoveError::GameOver`] once the game is terminal; only
    ///   [`GameSession::reset`] accepts further input.
    #[instrument(skip(self))]
    pub fn handle_move_request(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<GameStatus, MoveError> {
        let pos = Position::from_coords(row, column).ok_or_else(|| {
            warn!(row, column, "Move request outside the grid");
            MoveError::OutOfRange { row, column }
        })?;

        self.submit(pos)?;
        self.run_computer_turns();
        Ok(self.game.state().status())
    }

    /// Resets the board and game state for a new game.
    ///
    /// The score is untouched. This is the only way to leave a terminal
    /// state, and also the only way to abandon a game in progress. If
    /// player one is a computer, its opening move is played immediately.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.game.reset();
        self.renderer.on_board_cleared();
        self.run_computer_turns();
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Returns the session score.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Returns the player whose move is awaited, or `None` once terminal.
    pub fn active_player(&self) -> Option<Player> {
        if self.game.state().status().is_terminal() {
            None
        } else {
            Some(self.player_for(self.game.state().current_player()))
        }
    }

    /// Returns player one (X).
    pub fn player_one(&self) -> Player {
        self.player_one
    }

    /// Returns player two (O).
    pub fn player_two(&self) -> Player {
        self.player_two
    }

    /// True once the game has ended in a win or a draw.
    pub fn is_over(&self) -> bool {
        self.game.state().status().is_terminal()
    }

    /// Applies one move for the active player and notifies collaborators.
    fn submit(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let mark = self.game.state().current_player();
        let status = self.game.make_move(pos).map_err(|err| {
            warn!(%pos, %err, "Move rejected");
            err
        })?;

        self.renderer.on_cell_changed(pos, mark);
        if status.is_terminal() {
            self.finish(status);
        }
        Ok(status)
    }

    /// Records the outcome and notifies collaborators, exactly once per
    /// terminal state.
    fn finish(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(mark) => {
                let number = self.player_for(mark).number();
                self.score.record_win(number);
            }
            GameStatus::Draw => self.score.record_draw(),
            GameStatus::InProgress => return,
        }

        info!(%status, score = %self.score, "Game over");
        self.renderer
            .on_outcome(status, self.game.state().winning_line());
        self.score_display.on_score_updated(&self.score);
    }

    /// Plays computer turns until a human is active or the game ends.
    fn run_computer_turns(&mut self) {
        while self.game.state().status() == GameStatus::InProgress {
            let player = self.player_for(self.game.state().current_player());
            if !player.is_computer() {
                break;
            }

            // The policy selects from the empty-cell set, so a chosen move
            // can neither miss the grid nor hit an occupied cell.
            let Some(pos) = player.select_move(self.game.state().board(), &mut self.rng) else {
                break;
            };
            if self.submit(pos).is_err() {
                break;
            }
        }
    }

    fn player_for(&self, mark: Mark) -> Player {
        if self.player_one.mark() == mark {
            self.player_one
        } else {
            self.player_two
        }
    }
}

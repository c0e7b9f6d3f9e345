//! Presentation collaborators notified by the session.
//!
//! The engine never touches presentation state directly: renderers receive
//! cell-level change notifications and terminal outcomes, score displays
//! receive tally updates. All methods default to no-ops so implementations
//! pick only what they need.

use crate::position::Position;
use crate::score::ScoreBoard;
use crate::types::{GameStatus, Mark};

/// Receives board-level notifications from a [`crate::GameSession`].
pub trait BoardRenderer {
    /// A cell changed from empty to occupied.
    fn on_cell_changed(&mut self, _position: Position, _mark: Mark) {}

    /// The game reached a terminal state.
    ///
    /// `winning_line` carries the completed line on a win so the renderer
    /// can highlight it; it is `None` on a draw.
    fn on_outcome(&mut self, _status: GameStatus, _winning_line: Option<[Position; 3]>) {}

    /// The board was cleared by a reset.
    fn on_board_cleared(&mut self) {}
}

/// Receives score updates after each terminal transition.
pub trait ScoreDisplay {
    /// The score changed.
    fn on_score_updated(&mut self, _score: &ScoreBoard) {}
}

/// Renderer that ignores every notification; for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {}

/// Score display that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreDisplay;

impl ScoreDisplay for NullScoreDisplay {}

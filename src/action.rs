//! First-class move events and the errors that can reject them.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
///
/// Moves are domain events. They are recorded in the game history and
/// handed to the rule engine, which only ever needs to examine the lines
/// passing through the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error raised when a move request is rejected.
///
/// Every variant is recoverable: a rejected request leaves the board and
/// game state exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested coordinates fall outside the 3x3 grid.
    #[display("no cell at row {row}, column {column}")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell at the position is already occupied.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Position),

    /// The game has already reached a terminal state.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

//! Board positions and grid geometry.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// The nine cells are named rather than indexed so that an invalid
/// coordinate cannot exist once a request has been translated into a
/// `Position`. Conversions from `(row, column)` pairs live in
/// [`Position::from_coords`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// The main diagonal (`row == column`).
    pub const MAIN_DIAGONAL: [Position; 3] =
        [Position::TopLeft, Position::Center, Position::BottomRight];

    /// The anti-diagonal (`row + column == 2`).
    pub const ANTI_DIAGONAL: [Position; 3] =
        [Position::TopRight, Position::Center, Position::BottomLeft];

    /// Returns the row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Returns the column of this position (0-2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Converts the position to a row-major board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Creates a position from `(row, column)` coordinates.
    ///
    /// Returns `None` when either coordinate falls outside `[0, 3)`.
    #[instrument]
    pub fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row >= 3 || column >= 3 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// True if this position lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row() == self.column()
    }

    /// True if this position lies on the anti-diagonal.
    ///
    /// The center cell lies on both diagonals.
    pub fn on_anti_diagonal(self) -> bool {
        self.row() + self.column() == 2
    }

    /// Human-readable label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Mover-relative win detection.

use crate::action::Move;
use crate::position::Position;
use crate::types::{Board, Square};
use tracing::instrument;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
];

const COLUMNS: [[Position; 3]; 3] = [
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

/// Returns the line completed by `last_move`, if any.
///
/// Only the row, the column, and (when the cell lies on one) the
/// diagonal(s) through the move's cell are checked, and only for the
/// mover's mark: no other line can have been completed by this move.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, last_move: Move) -> Option<[Position; 3]> {
    let pos = last_move.position;
    let mark = Square::Occupied(last_move.mark);

    let mut candidates = vec![ROWS[pos.row()], COLUMNS[pos.column()]];
    if pos.on_main_diagonal() {
        candidates.push(Position::MAIN_DIAGONAL);
    }
    if pos.on_anti_diagonal() {
        candidates.push(Position::ANTI_DIAGONAL);
    }

    candidates
        .into_iter()
        .find(|line| line.iter().all(|&p| board.get(p) == mark))
}

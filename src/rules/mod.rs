//! Win and draw evaluation over a board.
//!
//! Evaluation is a pure function of the board plus the move that was just
//! played. A move can only create a win for the mark that made it, and only
//! through lines passing through its cell, so that is all the win check
//! examines. The win check always precedes the draw check.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::action::Move;
use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board after `last_move` has been applied.
///
/// Returns `Won` if the move completed a line, `Draw` if the board is full
/// with no win, and `InProgress` otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_move: Move) -> GameStatus {
    if win::winning_line(board, last_move).is_some() {
        GameStatus::Won(last_move.mark)
    } else if draw::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_single_move_in_progress() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        let status = evaluate(&board, Move::new(Mark::X, Position::Center));
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn test_win_checked_before_draw() {
        // Full board where the last move also completes a column.
        let mut board = Board::new();
        let layout = [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::O),
            (Position::BottomLeft, Mark::X),
        ];
        for (pos, mark) in layout {
            board.set(pos, Square::Occupied(mark));
        }

        let status = evaluate(&board, Move::new(Mark::X, Position::BottomLeft));
        assert_eq!(status, GameStatus::Won(Mark::X));
    }
}

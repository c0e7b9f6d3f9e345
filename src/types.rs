//! Core domain types: marks, squares, the board, and game state.

use crate::action::{Move, MoveError};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (goes first).
    X,
    /// O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are created once at construction and only ever change through
/// [`Board::place`] (or [`Board::clear`] on reset), so an accepted move
/// changes exactly one square and an occupied square stays occupied until
/// the board is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets a square without occupancy checks.
    ///
    /// Game code goes through [`Board::place`]; this exists for rule and
    /// invariant tests that need to construct arbitrary boards.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if the square at the position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Gets the square at `(row, column)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when either coordinate falls
    /// outside `[0, 3)`.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Square, MoveError> {
        Position::from_coords(row, column)
            .map(|pos| self.get(pos))
            .ok_or(MoveError::OutOfRange { row, column })
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the square is not empty; the
    /// board is left unchanged.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Returns the positions of all empty squares, in board order.
    ///
    /// This is the legal-move set; move policies select directly from it.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Clears every square back to empty.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has ended in a win or a draw.
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark) => write!(f, "{mark} wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Complete game state.
///
/// Becomes terminal exactly once per game; a terminal state only goes back
/// to `InProgress` through a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
    /// Moves played so far, in order.
    history: Vec<Move>,
    /// The completed line, once the game has been won.
    winning_line: Option<[Position; 3]>,
}

impl GameState {
    /// Creates a new game state with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose move is awaited.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played; always equals the number of occupied squares.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the completed line once the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Applies a validated move (use `Game::make_move` for validation).
    pub(crate) fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board.place(mv.position, mv.mark)?;
        self.history.push(mv);
        self.current_player = mv.mark.opponent();
        Ok(())
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Records the completed line after a win.
    pub(crate) fn set_winning_line(&mut self, line: [Position; 3]) {
        self.winning_line = Some(line);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

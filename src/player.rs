//! Players and computer move policies.

use crate::position::Position;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Difficulty of a computer opponent.
///
/// Only [`Difficulty::Easy`] has a dedicated policy. `Medium` and `Hard`
/// are extension points and currently play the same random policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform-random selection among empty cells.
    Easy,
    /// Reserved; plays the easy policy.
    Medium,
    /// Reserved; plays the easy policy.
    Hard,
}

/// What kind of player occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied externally (UI events); the engine never invents
    /// them.
    Human,
    /// Moves are selected by a policy.
    Computer {
        /// Policy strength.
        difficulty: Difficulty,
    },
}

/// A player in a session: mark, display number, and kind.
///
/// Immutable for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    number: u8,
    kind: PlayerKind,
}

impl Player {
    /// Creates a new player.
    pub fn new(mark: Mark, number: u8, kind: PlayerKind) -> Self {
        Self { mark, number, kind }
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the player's display number (1 or 2).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the player's kind.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True if this player's moves are selected by a policy.
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer { .. })
    }

    /// Selects a move for a computer player.
    ///
    /// Selection is made directly from the set of empty cells, so it never
    /// proposes an occupied cell and never loops on a near-full board.
    /// Returns `None` for human players and when no empty cell remains.
    pub fn select_move<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        let PlayerKind::Computer { difficulty } = self.kind else {
            return None;
        };

        let open = board.empty_positions();
        let choice = match difficulty {
            // Medium and Hard are not implemented yet; every difficulty
            // plays the uniform-random policy.
            Difficulty::Easy | Difficulty::Medium | Difficulty::Hard => {
                open.choose(rng).copied()
            }
        };

        if let Some(pos) = choice {
            debug!(player = self.number, %pos, "Computer selected move");
        }
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_human_never_invents_moves() {
        let player = Player::new(Mark::X, 1, PlayerKind::Human);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(player.select_move(&Board::new(), &mut rng), None);
    }

    #[test]
    fn test_computer_selects_only_empty_cells() {
        let player = Player::new(
            Mark::O,
            2,
            PlayerKind::Computer {
                difficulty: Difficulty::Easy,
            },
        );
        let mut rng = StdRng::seed_from_u64(7);

        // Leave a single empty cell; the policy must find it directly.
        let mut board = Board::new();
        for pos in Board::new().empty_positions() {
            if pos != Position::BottomCenter {
                board.set(pos, Square::Occupied(Mark::X));
            }
        }

        for _ in 0..50 {
            assert_eq!(
                player.select_move(&board, &mut rng),
                Some(Position::BottomCenter)
            );
        }
    }

    #[test]
    fn test_computer_with_no_open_cell() {
        let player = Player::new(
            Mark::O,
            2,
            PlayerKind::Computer {
                difficulty: Difficulty::Easy,
            },
        );
        let mut rng = StdRng::seed_from_u64(7);

        let mut board = Board::new();
        for pos in Board::new().empty_positions() {
            board.set(pos, Square::Occupied(Mark::X));
        }
        assert_eq!(player.select_move(&board, &mut rng), None);
    }
}

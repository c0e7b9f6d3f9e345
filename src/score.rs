//! Session-persistent score tallies.

use serde::{Deserialize, Serialize};

/// Running score for a session.
///
/// Persists across game resets; each terminal game increments exactly one
/// tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    player_one_wins: u32,
    draws: u32,
    player_two_wins: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Player one's win count.
    pub fn player_one_wins(&self) -> u32 {
        self.player_one_wins
    }

    /// Draw count.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Player two's win count.
    pub fn player_two_wins(&self) -> u32 {
        self.player_two_wins
    }

    /// Total number of finished games.
    pub fn games_played(&self) -> u32 {
        self.player_one_wins + self.draws + self.player_two_wins
    }

    pub(crate) fn record_win(&mut self, player_number: u8) {
        debug_assert!(player_number == 1 || player_number == 2);
        if player_number == 1 {
            self.player_one_wins += 1;
        } else {
            self.player_two_wins += 1;
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player One: {} | Draw: {} | Player Two: {}",
            self.player_one_wins, self.draws, self.player_two_wins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallies() {
        let mut score = ScoreBoard::new();
        score.record_win(1);
        score.record_draw();
        score.record_win(2);
        score.record_win(1);

        assert_eq!(score.player_one_wins(), 2);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.player_two_wins(), 1);
        assert_eq!(score.games_played(), 4);
    }

    #[test]
    fn test_display() {
        let mut score = ScoreBoard::new();
        score.record_win(2);
        assert_eq!(score.to_string(), "Player One: 0 | Draw: 0 | Player Two: 1");
    }
}

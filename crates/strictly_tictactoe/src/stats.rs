//! Aggregate cross-session game statistics.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win/draw counters persisted between sessions.
///
/// Serialized as `{"xWins":..,"oWins":..,"draws":..,"totalGames":..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// All completed games.
    total_games: u32,
}

impl Statistics {
    /// Builds statistics from explicit counters.
    pub fn new(x_wins: u32, o_wins: u32, draws: u32, total_games: u32) -> Self {
        Self {
            x_wins,
            o_wins,
            draws,
            total_games,
        }
    }

    /// Whether `total_games` equals the sum of the outcome counters.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
            == u64::from(self.total_games)
    }

    /// Counts one finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { player: Player::X, .. } => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Won { player: Player::O, .. } => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::InProgress => return,
        }
        self.total_games = self.total_games.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_serializes_camel_case() {
        let stats = Statistics::new(2, 1, 3, 6);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"xWins":2,"oWins":1,"draws":3,"totalGames":6}"#);
    }

    #[test]
    fn test_record_outcomes() {
        let mut stats = Statistics::default();
        stats.record(&Outcome::Won {
            player: Player::O,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        });
        stats.record(&Outcome::Draw);
        stats.record(&Outcome::InProgress);
        assert_eq!(stats, Statistics::new(0, 1, 1, 2));
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_inconsistent_totals_detected() {
        assert!(!Statistics::new(1, 0, 0, 5).is_consistent());
    }
}

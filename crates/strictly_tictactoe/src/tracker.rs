//! Statistics tracker: credits each finished game once and persists it.

use super::invariants::{Invariant, StatisticsTotalInvariant};
use super::{Board, KeyValueStore, Outcome, Statistics, evaluate};
use tracing::{debug, info, instrument, warn};

/// Observes board snapshots and counts terminal outcomes at most once.
///
/// The tracker remembers the last terminal snapshot it credited. Seeing
/// that snapshot again (redo, jump back to the end of the game) does not
/// count; a different terminal snapshot, or any terminal snapshot after
/// [`start_new_game`](Self::start_new_game), does.
#[derive(Debug)]
pub struct StatisticsTracker<S> {
    store: S,
    key: String,
    stats: Statistics,
    last_credited: Option<Board>,
}

impl<S: KeyValueStore> StatisticsTracker<S> {
    /// Loads statistics stored under `key`, falling back to zeros.
    ///
    /// Read failures, unparseable records and records whose total does
    /// not match their counters are logged and replaced with zeros.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn load(store: S, key: impl AsRef<str>) -> Self {
        let key = key.as_ref().to_string();
        let stats = Self::read(&store, &key);
        info!(total_games = stats.total_games(), "Statistics loaded");
        Self {
            store,
            key,
            stats,
            last_credited: None,
        }
    }

    fn read(store: &S, key: &str) -> Statistics {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored statistics, starting from zero");
                return Statistics::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read statistics, starting from zero");
                return Statistics::default();
            }
        };

        match serde_json::from_str::<Statistics>(&raw) {
            Ok(stats) if StatisticsTotalInvariant::holds(&stats) => stats,
            Ok(stats) => {
                warn!(?stats, "{}, starting from zero", StatisticsTotalInvariant::description());
                Statistics::default()
            }
            Err(e) => {
                warn!(error = %e, "Corrupt statistics record, starting from zero");
                Statistics::default()
            }
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.stats) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize statistics");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &json) {
            warn!(error = %e, "Failed to save statistics, keeping in-memory counts");
        }
    }

    /// Current counters.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Feeds the board now shown to the player.
    ///
    /// Returns the outcome if this observation credited a finished game.
    #[instrument(skip(self))]
    pub fn observe(&mut self, board: &Board) -> Option<Outcome> {
        let outcome = evaluate(board);
        if !outcome.is_terminal() {
            return None;
        }
        if self.last_credited.as_ref() == Some(board) {
            debug!("Outcome already credited for this game");
            return None;
        }

        self.stats.record(&outcome);
        self.last_credited = Some(*board);
        info!(%outcome, total_games = self.stats.total_games(), "Game credited");
        self.persist();
        Some(outcome)
    }

    /// Forgets the credited snapshot so the next finished game counts.
    pub fn start_new_game(&mut self) {
        self.last_credited = None;
    }

    /// Zeros every counter and removes the stored record.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) {
        self.stats = Statistics::default();
        match self.store.remove(&self.key) {
            Ok(()) => info!("Statistics reset"),
            Err(e) => warn!(error = %e, "Failed to clear stored statistics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, Player};

    const KEY: &str = "ticTacToeStats";

    #[test]
    fn test_load_absent_is_zero() {
        let tracker = StatisticsTracker::load(MemoryStore::new(), KEY);
        assert_eq!(tracker.statistics(), &Statistics::default());
    }

    #[test]
    fn test_load_existing_record() {
        let store = MemoryStore::with_entry(KEY, r#"{"xWins":2,"oWins":1,"draws":0,"totalGames":3}"#);
        let tracker = StatisticsTracker::load(store, KEY);
        assert_eq!(tracker.statistics(), &Statistics::new(2, 1, 0, 3));
    }

    #[test]
    fn test_load_corrupt_is_zero() {
        let store = MemoryStore::with_entry(KEY, "{not json");
        let tracker = StatisticsTracker::load(store, KEY);
        assert_eq!(tracker.statistics(), &Statistics::default());
    }

    #[test]
    fn test_in_progress_not_credited() {
        let mut tracker = StatisticsTracker::load(MemoryStore::new(), KEY);
        let board = Board::new().place(crate::Position::Center, Player::X).unwrap();
        assert_eq!(tracker.observe(&board), None);
        assert_eq!(*tracker.statistics().total_games(), 0);
    }

    #[test]
    fn test_same_snapshot_credited_once() {
        let mut tracker = StatisticsTracker::load(MemoryStore::new(), KEY);
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(tracker.observe(&board).is_some());
        assert!(tracker.observe(&board).is_none());
        assert_eq!(tracker.statistics(), &Statistics::new(1, 0, 0, 1));

        tracker.start_new_game();
        assert!(tracker.observe(&board).is_some());
        assert_eq!(tracker.statistics(), &Statistics::new(2, 0, 0, 2));
    }

    #[test]
    fn test_credit_is_persisted() {
        let mut tracker = StatisticsTracker::load(MemoryStore::new(), KEY);
        tracker.observe(&"XOX/XOO/OXX".parse::<Board>().unwrap());
        let saved = tracker.store().get(KEY).unwrap().unwrap();
        assert_eq!(saved, r#"{"xWins":0,"oWins":0,"draws":1,"totalGames":1}"#);
    }
}

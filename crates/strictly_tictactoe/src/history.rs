//! Snapshot log with a cursor: play, undo, redo and time-travel.
//!
//! The log stores whole boards rather than moves. Index 0 is always the
//! empty board and index `n` is the board after move `n`. Playing from
//! anywhere but the last snapshot discards the redo future first.

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots plus the current-position cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    history: Vec<Board>,
    cursor: usize,
}

impl MoveLog {
    /// Creates a log holding only the empty board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Appends `next` after the cursor, discarding any redo future.
    ///
    /// The log accepts any board; move legality is checked by the caller.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play(&mut self, next: Board) {
        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating redo branch");
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
    }

    /// Moves the cursor to snapshot `n`.
    ///
    /// Returns `false` and leaves the log untouched when `n` is out of range.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, n: usize) -> bool {
        if n >= self.history.len() {
            debug!("Jump target out of range, ignoring");
            return false;
        }
        self.cursor = n;
        true
    }

    /// Steps back one snapshot. No-op at the start of the game.
    pub fn undo(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(prev) => self.jump_to(prev),
            None => false,
        }
    }

    /// Steps forward one snapshot. No-op when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.jump_to(self.cursor + 1)
    }

    /// Restores the single-empty-board state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(len = self.history.len(), "Resetting move log");
        self.history.clear();
        self.history.push(Board::new());
        self.cursor = 0;
    }

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Current move number.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the empty start board.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the start board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// All snapshots in move order.
    pub fn boards(&self) -> &[Board] {
        &self.history
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Player to move at the cursor: X on even moves, O on odd.
    pub fn next_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

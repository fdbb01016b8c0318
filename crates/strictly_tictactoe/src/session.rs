//! Game session: the command and read boundary for the host UI.
//!
//! A session owns the move log, the statistics tracker and the display
//! filter. Every command runs synchronously to completion; after any
//! command that moves the cursor the visible board is fed to the tracker.

use super::invariants::{InvariantSet, MoveLogInvariants};
use super::{
    Board, FilterState, GameConfig, KeyValueStore, MoveError, MoveLog, MoveRecord, Outcome, Player,
    Position, SortOrder, Statistics, StatisticsTracker, annotate, evaluate, order_moves,
};
use tracing::{debug, info, instrument, warn};

/// One player's view of a tic-tac-toe game plus its lifetime statistics.
#[derive(Debug)]
pub struct GameSession<S> {
    log: MoveLog,
    tracker: StatisticsTracker<S>,
    filter: FilterState,
    order: SortOrder,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Starts a session, loading statistics from `store`.
    #[instrument(skip(store, config), fields(stats_key = %config.stats_key()))]
    pub fn new(store: S, config: &GameConfig) -> Self {
        info!("Starting game session");
        Self {
            log: MoveLog::new(),
            tracker: StatisticsTracker::load(store, config.stats_key()),
            filter: FilterState::default(),
            order: *config.order(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the next player's mark on cell `index` (0-8, row-major).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index > 8`
    /// - [`MoveError::GameOver`] if the visible board is already won or drawn
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(cursor = self.log.cursor()))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if evaluate(self.log.current()).is_terminal() {
            debug!("Move rejected, game over");
            return Err(MoveError::GameOver);
        }

        let player = self.log.next_player();
        let next = self.log.current().place(pos, player)?;
        self.log.play(next);
        debug!(%player, position = %pos, "Move played");

        if cfg!(debug_assertions)
            && let Err(violations) = MoveLogInvariants::check_all(&self.log)
        {
            warn!(?violations, "Move log invariant violated");
        }

        self.observe();
        Ok(self.outcome())
    }

    /// Steps back one move. Returns `false` at game start.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let moved = self.log.undo();
        if moved {
            self.observe();
        }
        moved
    }

    /// Steps forward one move. Returns `false` when nothing can be redone.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> bool {
        let moved = self.log.redo();
        if moved {
            self.observe();
        }
        moved
    }

    /// Moves to snapshot `n`. Out-of-range targets are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, n: usize) -> bool {
        let moved = self.log.jump_to(n);
        if moved {
            self.observe();
        }
        moved
    }

    /// Starts a new game and clears the history filters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("New game");
        self.log.reset();
        self.tracker.start_new_game();
        self.filter = FilterState::default();
    }

    /// Replaces both history filters.
    pub fn set_filter(&mut self, player: Option<Player>, query: impl Into<String>) {
        self.filter = FilterState::new(player, query);
    }

    /// Replaces the player filter.
    pub fn set_player_filter(&mut self, player: Option<Player>) {
        self.filter.set_player(player);
    }

    /// Replaces the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Removes both history filters.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Flips the history display order and returns the new order.
    pub fn toggle_order(&mut self) -> SortOrder {
        self.order = self.order.toggled();
        self.order
    }

    /// Zeros the statistics and clears the stored record.
    pub fn reset_statistics(&mut self) {
        self.tracker.reset_statistics();
    }

    fn observe(&mut self) {
        let board = *self.log.current();
        if let Some(outcome) = self.tracker.observe(&board) {
            debug!(%outcome, "Finished game recorded");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read model
    // ─────────────────────────────────────────────────────────────

    /// Board at the cursor.
    pub fn board(&self) -> &Board {
        self.log.current()
    }

    /// Outcome of the visible board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.log.current())
    }

    /// Player whose mark the next [`play`](Self::play) places.
    pub fn next_player(&self) -> Player {
        self.log.next_player()
    }

    /// Cursor position in the move log.
    pub fn current_move(&self) -> usize {
        self.log.cursor()
    }

    /// Whether [`undo`](Self::undo) would do anything.
    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    /// Whether [`redo`](Self::redo) would do anything.
    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// Annotated history after filtering, in display order.
    pub fn moves(&self) -> Vec<MoveRecord> {
        order_moves(self.filter.apply(&annotate(&self.log)), self.order)
    }

    /// Lifetime statistics.
    pub fn statistics(&self) -> &Statistics {
        self.tracker.statistics()
    }

    /// Active history filters.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// History display order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Underlying move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Statistics tracker, for access to its store.
    pub fn tracker(&self) -> &StatisticsTracker<S> {
        &self.tracker
    }
}

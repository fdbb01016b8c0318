//! Strictly Tic-Tac-Toe - game core for a browser-hosted tic-tac-toe UI
//!
//! This library holds every piece of game logic; the host UI only renders
//! what it reads and forwards discrete commands.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over immutable boards
//! - **History**: snapshot log with undo, redo and time-travel
//! - **Annotate / Filter**: derived move records and display queries
//! - **Tracker**: at-most-once statistics crediting over a key-value store
//! - **Session**: the command/read boundary the host UI talks to
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameConfig, GameSession, MemoryStore, Outcome, Player};
//!
//! # fn example() -> Result<(), strictly_tictactoe::MoveError> {
//! let mut session = GameSession::new(MemoryStore::new(), &GameConfig::default());
//! for cell in [0, 3, 1, 4, 2] {
//!     session.play(cell)?;
//! }
//! assert!(matches!(session.outcome(), Outcome::Won { player: Player::X, .. }));
//! assert_eq!(*session.statistics().x_wins(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod annotate;
mod config;
mod filter;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod session;
mod stats;
mod store;
mod tracker;
mod types;

// Crate-level exports - Domain types
pub use action::MoveError;
pub use position::Position;
pub use types::{Board, BoardParseError, Player, Square};

// Crate-level exports - Board evaluation
pub use outcome::Outcome;
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - History and derived views
pub use annotate::{IntegrityError, Location, MoveRecord, annotate, annotate_boards, diff_cell};
pub use filter::{FilterState, SearchQuery, SortOrder, filter_moves, order_moves};
pub use history::MoveLog;

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, Invariant, InvariantSet,
    InvariantViolation, MoveLogInvariants, SingleStepInvariant, StatisticsTotalInvariant,
};

// Crate-level exports - Statistics and persistence
pub use stats::Statistics;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use tracker::StatisticsTracker;

// Crate-level exports - Configuration and session
pub use config::{ConfigError, DEFAULT_STATS_KEY, GameConfig};
pub use session::GameSession;

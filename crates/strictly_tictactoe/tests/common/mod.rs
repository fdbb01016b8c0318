//! Shared helpers for integration tests.

#![allow(dead_code)]

use strictly_tictactoe::{GameConfig, GameSession, KeyValueStore, MemoryStore};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh session over an empty in-memory store.
pub fn new_session() -> GameSession<MemoryStore> {
    init_tracing();
    GameSession::new(MemoryStore::new(), &GameConfig::default())
}

/// Plays `cells` in order, panicking on any rejected move.
pub fn play_all<S: KeyValueStore>(session: &mut GameSession<S>, cells: &[usize]) {
    for &cell in cells {
        session
            .play(cell)
            .unwrap_or_else(|e| panic!("move {} rejected: {}", cell, e));
    }
}

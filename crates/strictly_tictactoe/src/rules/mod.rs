//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board snapshot. Nothing here holds state;
//! the outcome of any snapshot is recomputed on demand.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// Win detection runs before the draw check, so a full board that also
/// holds a line is reported as a win.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Won { player, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

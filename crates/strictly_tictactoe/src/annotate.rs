//! Per-move metadata derived by diffing consecutive snapshots.

use super::{Board, MoveLog, Player, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Description of the move-0 entry.
const GAME_START: &str = "Go to game start";

/// Zero-based board coordinate of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Location {
    /// Row (0 = top).
    pub row: usize,
    /// Column (0 = left).
    pub col: usize,
}

impl From<Position> for Location {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.col())
    }
}

/// Display metadata for one entry of the move log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Index into the move log (0 = game start).
    move_number: usize,
    /// Player who made the move; `None` for the game-start entry.
    player: Option<Player>,
    /// Cell the move was played on; `None` for the game-start entry.
    location: Option<Location>,
    /// Human-readable label, e.g. `Go to move #3 (1, 2)`.
    description: String,
    /// Whether the log cursor sits on this entry.
    is_current: bool,
}

impl MoveRecord {
    fn game_start(is_current: bool) -> Self {
        Self {
            move_number: 0,
            player: None,
            location: None,
            description: GAME_START.to_string(),
            is_current,
        }
    }

    /// Whether this is the always-visible game-start entry.
    pub fn is_game_start(&self) -> bool {
        self.move_number == 0
    }
}

/// Snapshot pair that is not a single added mark.
#[derive(Debug, Clone, Display, Error)]
#[display("History integrity error: {} at {}:{}", message, file, line)]
pub struct IntegrityError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IntegrityError {
    /// Creates a new integrity error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

fn differing_cells(prev: &Board, next: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| prev.get(*pos) != next.get(*pos))
        .collect()
}

/// Finds the single cell that changed between two consecutive snapshots.
///
/// # Errors
///
/// Returns [`IntegrityError`] when no cell or more than one cell differs.
#[instrument]
pub fn diff_cell(prev: &Board, next: &Board) -> Result<Position, IntegrityError> {
    match differing_cells(prev, next).as_slice() {
        [pos] => Ok(*pos),
        [] => Err(IntegrityError::new("Snapshots are identical")),
        many => Err(IntegrityError::new(format!(
            "{} cells differ between snapshots",
            many.len()
        ))),
    }
}

fn annotate_move(move_number: usize, prev: &Board, next: &Board, is_current: bool) -> MoveRecord {
    let pos = match diff_cell(prev, next) {
        Ok(pos) => Some(pos),
        Err(e) => {
            warn!(move_number, error = %e, "Move log integrity fault");
            differing_cells(prev, next).first().copied()
        }
    };

    let location = pos.map(Location::from);
    let description = match location {
        Some(Location { row, col }) => format!("Go to move #{} ({}, {})", move_number, row, col),
        None => format!("Go to move #{}", move_number),
    };

    MoveRecord {
        move_number,
        player: pos.and_then(|p| next.get(p).player()),
        location,
        description,
        is_current,
    }
}

/// Annotates raw snapshots, marking the entry at `cursor` as current.
#[instrument(skip(boards), fields(len = boards.len()))]
pub fn annotate_boards(boards: &[Board], cursor: usize) -> Vec<MoveRecord> {
    let mut records = Vec::with_capacity(boards.len());
    if boards.is_empty() {
        return records;
    }
    records.push(MoveRecord::game_start(cursor == 0));
    records.extend(
        boards
            .windows(2)
            .enumerate()
            .map(|(i, pair)| annotate_move(i + 1, &pair[0], &pair[1], cursor == i + 1)),
    );
    records
}

/// Annotates every entry of the move log.
pub fn annotate(log: &MoveLog) -> Vec<MoveRecord> {
    annotate_boards(log.boards(), log.cursor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_start_record() {
        let records = annotate(&MoveLog::new());
        assert_eq!(records.len(), 1);
        assert!(records[0].is_game_start());
        assert_eq!(records[0].description(), "Go to game start");
        assert_eq!(records[0].player(), &None);
        assert!(*records[0].is_current());
    }

    #[test]
    fn test_move_description_and_location() {
        let b1 = Board::new().place(Position::MiddleRight, Player::X).unwrap();
        let records = annotate_boards(&[Board::new(), b1], 0);
        let rec = &records[1];
        assert_eq!(*rec.move_number(), 1);
        assert_eq!(rec.player(), &Some(Player::X));
        assert_eq!(rec.location(), &Some(Location::new(1, 2)));
        assert_eq!(rec.description(), "Go to move #1 (1, 2)");
        assert!(!*rec.is_current());
    }

    #[test]
    fn test_diff_cell_rejects_multiple_changes() {
        let two: Board = "XO./.../...".parse().unwrap();
        assert!(diff_cell(&Board::new(), &two).is_err());
        assert!(diff_cell(&two, &two).is_err());
    }

    #[test]
    fn test_integrity_fault_degrades_to_first_cell() {
        let two: Board = ".../.XO/...".parse().unwrap();
        let records = annotate_boards(&[Board::new(), two], 1);
        assert_eq!(records[1].location(), &Some(Location::new(1, 1)));
        assert_eq!(records[1].player(), &Some(Player::X));
    }

    #[test]
    fn test_identical_snapshots_have_no_location() {
        let records = annotate_boards(&[Board::new(), Board::new()], 1);
        assert_eq!(records[1].location(), &None);
        assert_eq!(records[1].player(), &None);
        assert_eq!(records[1].description(), "Go to move #1");
    }
}

//! First-class invariants over the move log and statistics.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and the session checks the log set
//! after every accepted move in debug builds.

use super::{Board, MoveLog, Player, Square, Statistics};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Invariant: the cursor points at an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<MoveLog> for CursorInBoundsInvariant {
    fn holds(log: &MoveLog) -> bool {
        log.cursor() < log.len()
    }

    fn description() -> &'static str {
        "Cursor points into the history"
    }
}

fn is_single_step(prev: &Board, next: &Board) -> bool {
    let mut changed = prev
        .squares()
        .iter()
        .zip(next.squares())
        .filter(|(before, after)| before != after);

    matches!(
        (changed.next(), changed.next()),
        (Some((Square::Empty, Square::Occupied(_))), None)
    )
}

/// Invariant: every snapshot adds exactly one mark on an empty square.
///
/// Index 0 must be the empty board.
pub struct SingleStepInvariant;

impl Invariant<MoveLog> for SingleStepInvariant {
    fn holds(log: &MoveLog) -> bool {
        let boards = log.boards();
        boards.first() == Some(&Board::new())
            && boards.windows(2).all(|pair| is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

/// Invariant: X plays odd-numbered moves and O plays even-numbered ones.
pub struct AlternatingMarksInvariant;

impl Invariant<MoveLog> for AlternatingMarksInvariant {
    fn holds(log: &MoveLog) -> bool {
        log.boards().iter().enumerate().all(|(n, board)| {
            let x = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::X))
                .count();
            let o = board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(Player::O))
                .count();
            x == n.div_ceil(2) && o == n / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

/// Invariant: total games equals wins plus draws.
pub struct StatisticsTotalInvariant;

impl Invariant<Statistics> for StatisticsTotalInvariant {
    fn holds(stats: &Statistics) -> bool {
        stats.is_consistent()
    }

    fn description() -> &'static str {
        "Total games equals X wins plus O wins plus draws"
    }
}

/// All move log invariants as a composable set.
pub type MoveLogInvariants = (
    CursorInBoundsInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
);

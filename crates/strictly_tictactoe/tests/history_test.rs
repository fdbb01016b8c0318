//! Tests for move log navigation.

mod common;

use strictly_tictactoe::{Board, MoveLog, MoveLogInvariants, InvariantSet, Player, Position};

#[test]
fn test_undo_then_redo_round_trip() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[4, 0]);
    let before = *session.board();

    session.play(8).unwrap();
    let after = *session.board();

    assert!(session.undo());
    assert_eq!(session.board(), &before);
    assert!(session.redo());
    assert_eq!(session.board(), &after);
}

#[test]
fn test_new_move_discards_redo_branch() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 1, 2]);

    assert!(session.undo());
    assert!(session.undo());
    assert!(session.can_redo());

    session.play(8).unwrap();
    assert_eq!(session.log().len(), 3);
    assert_eq!(session.current_move(), 2);
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert!(!session.redo());
    assert_eq!(session.current_move(), 2);
}

#[test]
fn test_jump_to_keeps_history() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 1, 2, 3]);

    assert!(session.jump_to(1));
    assert_eq!(session.current_move(), 1);
    assert_eq!(session.log().len(), 5);
    assert_eq!(session.next_player(), Player::O);

    assert!(!session.jump_to(5));
    assert_eq!(session.current_move(), 1);

    assert!(session.jump_to(4));
    assert!(!session.can_redo());
}

#[test]
fn test_navigation_is_safe_at_edges() {
    let mut session = common::new_session();
    assert!(!session.can_undo());
    assert!(!session.undo());
    assert!(!session.redo());
    assert!(!session.jump_to(1));
    assert_eq!(session.current_move(), 0);
}

#[test]
fn test_reset_restores_initial_log() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 3, 1, 4]);
    session.undo();

    session.reset();
    assert_eq!(session.log(), &MoveLog::new());
    assert_eq!(session.log().boards(), &[Board::new()]);
    assert_eq!(session.current_move(), 0);
}

#[test]
fn test_log_accepts_any_board() {
    let mut log = MoveLog::new();
    let odd: Board = "XXO/.../...".parse().unwrap();
    log.play(odd);
    assert_eq!(log.current(), &odd);
    assert!(MoveLogInvariants::check_all(&log).is_err());
}

#[test]
fn test_played_log_satisfies_invariants() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[4, 0, 8, 2]);
    session.undo();
    session.play(6).unwrap();
    assert!(MoveLogInvariants::check_all(session.log()).is_ok());
    assert_eq!(session.board().get(Position::BottomLeft).player(), Some(Player::O));
}

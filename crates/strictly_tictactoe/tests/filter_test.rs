//! Tests for move annotation and history filtering.

mod common;

use strictly_tictactoe::{
    Location, MoveRecord, Player, SortOrder, annotate, filter_moves, order_moves,
};

fn numbers(records: &[MoveRecord]) -> Vec<usize> {
    records.iter().map(|r| *r.move_number()).collect()
}

/// X: (0,0) (0,2) (2,1); O: (1,1) (0,1) (2,2)
fn sample_records() -> Vec<MoveRecord> {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 4, 2, 1, 7, 8]);
    annotate(session.log())
}

#[test]
fn test_annotation_matches_moves() {
    let records = sample_records();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].description(), "Go to game start");
    assert_eq!(records[2].player(), &Some(Player::O));
    assert_eq!(records[2].location(), &Some(Location::new(1, 1)));
    assert_eq!(records[2].description(), "Go to move #2 (1, 1)");
    assert!(*records[6].is_current());
    assert_eq!(records.iter().filter(|r| *r.is_current()).count(), 1);
}

#[test]
fn test_player_filter_keeps_game_start() {
    let records = sample_records();

    let x_only = filter_moves(&records, Some(Player::X), "");
    assert_eq!(numbers(&x_only), vec![0, 1, 3, 5]);
    assert!(x_only[1..].iter().all(|r| *r.player() == Some(Player::X)));

    let o_only = filter_moves(&records, Some(Player::O), "");
    assert_eq!(numbers(&o_only), vec![0, 2, 4, 6]);
}

#[test]
fn test_no_filters_returns_everything_in_order() {
    let records = sample_records();
    assert_eq!(filter_moves(&records, None, "   "), records);
}

#[test]
fn test_location_query_forms_agree() {
    let records = sample_records();
    let plain = filter_moves(&records, None, "0,0");
    let wrapped = filter_moves(&records, None, "(0,0)");
    assert_eq!(plain, wrapped);
    assert_eq!(numbers(&plain), vec![0, 1]);
}

#[test]
fn test_location_query_without_match_keeps_game_start() {
    let records = sample_records();
    let none = filter_moves(&records, None, "(2,0)");
    assert_eq!(numbers(&none), vec![0]);
}

#[test]
fn test_filters_compose() {
    let records = sample_records();
    assert_eq!(numbers(&filter_moves(&records, Some(Player::O), "(1, 1)")), vec![0, 2]);
    assert_eq!(numbers(&filter_moves(&records, Some(Player::X), "1,1")), vec![0]);
}

#[test]
fn test_text_query_is_case_insensitive() {
    let records = sample_records();
    assert_eq!(numbers(&filter_moves(&records, None, "MOVE #4")), vec![0, 4]);
    assert_eq!(numbers(&filter_moves(&records, None, "(2, 2)")), vec![0, 6]);
    assert_eq!(numbers(&filter_moves(&records, None, "start")), vec![0]);
    assert_eq!(numbers(&filter_moves(&records, None, "zzz")), vec![0]);
}

#[test]
fn test_order_reverses_without_refiltering() {
    let records = sample_records();
    let filtered = filter_moves(&records, Some(Player::X), "");
    let reversed = order_moves(filtered.clone(), SortOrder::Descending);
    assert_eq!(numbers(&reversed), vec![5, 3, 1, 0]);
    assert_eq!(order_moves(filtered.clone(), SortOrder::Ascending), filtered);
}

#[test]
fn test_session_filter_does_not_move_cursor() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 4, 2]);
    session.jump_to(1);

    session.set_filter(Some(Player::O), "");
    let visible = session.moves();
    assert_eq!(numbers(&visible), vec![0, 2]);
    assert!(visible.iter().all(|r| !*r.is_current()));
    assert_eq!(session.current_move(), 1);

    session.clear_filters();
    assert!(session.filter().is_clear());
    assert_eq!(session.moves().len(), 4);
}

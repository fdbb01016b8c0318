//! Tests for board evaluation.

mod common;

use strictly_tictactoe::{
    Board, Outcome, Player, Position, Square, WINNING_LINES, evaluate, is_draw,
};

fn board_with_line(line: [Position; 3], player: Player) -> Board {
    let mut squares = [Square::Empty; 9];
    for pos in line {
        squares[pos.to_index()] = Square::Occupied(player);
    }
    Board::from_squares(squares)
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for line in WINNING_LINES {
        for player in [Player::X, Player::O] {
            let board = board_with_line(line, player);
            assert_eq!(evaluate(&board), Outcome::Won { player, line }, "line {:?}", line);
        }
    }
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    // Full board, O holds the main diagonal.
    let board: Board = "OXX/XOO/XXO".parse().unwrap();
    assert_eq!(
        evaluate(&board),
        Outcome::Won {
            player: Player::O,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        }
    );
    assert!(!is_draw(&board));
}

#[test]
fn test_full_board_without_line_is_draw() {
    for layout in ["XOX/XOO/OXX", "XOX/OXX/OXO", "OXO/XXO/XOX"] {
        let board: Board = layout.parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw, "{}", layout);
        assert!(is_draw(&board));
    }
}

#[test]
fn test_partial_board_in_progress() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::InProgress);
    assert!(!evaluate(&board).is_terminal());
}

#[test]
fn test_scenario_top_row_win() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 3, 1, 4, 2]);

    let outcome = session.outcome();
    assert_eq!(outcome.winner(), Some(Player::X));
    let line = outcome.winning_line().unwrap();
    assert_eq!(line.map(Position::to_index), [0, 1, 2]);
}

#[test]
fn test_scenario_full_board_draw() {
    let mut session = common::new_session();
    common::play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.board().occupied_count(), 9);
    assert_eq!(session.outcome(), Outcome::Draw);
}

//! Tests for board state strings and win/draw rules.

use noughts_core::rules::{LINES, check_winner, is_draw, is_full};
use noughts_core::{Board, INITIAL_STATE, Player, Position, Square, StateError};

/// Every string over `{0,1,2}` of length nine, in lexicographic order.
fn all_states() -> impl Iterator<Item = String> {
    (0..3u32.pow(9)).map(|mut n| {
        let mut cells = ['0'; 9];
        for cell in cells.iter_mut().rev() {
            *cell = char::from_digit(n % 3, 10).unwrap();
            n /= 3;
        }
        cells.iter().collect()
    })
}

#[test]
fn test_state_string_round_trip() {
    for state in all_states() {
        let board: Board = state.parse().unwrap();
        assert_eq!(board.state_string(), state);
    }
}

#[test]
fn test_winner_iff_uniform_triple() {
    for state in all_states() {
        let board: Board = state.parse().unwrap();
        let uniform = LINES.iter().any(|line| {
            let first = board.get(line[0]);
            first != Square::Empty && line.iter().all(|&p| board.get(p) == first)
        });
        assert_eq!(check_winner(&board).is_some(), uniform, "{state}");
    }
}

#[test]
fn test_full_without_winner_is_draw() {
    for state in all_states().filter(|s| !s.contains('0')) {
        let board: Board = state.parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(is_draw(&board), check_winner(&board).is_none(), "{state}");
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(Board::parse_state(""), Err(StateError::WrongLength(0)));
    assert_eq!(
        Board::parse_state("0000000000"),
        Err(StateError::WrongLength(10))
    );
    assert!(matches!(
        Board::parse_state("00000000x"),
        Err(StateError::InvalidCell { index: 8, found: 'x' })
    ));
}

#[test]
fn test_parse_error_message() {
    let err = Board::parse_state("12").unwrap_err();
    assert_eq!(err.to_string(), "State string must have 9 cells, found 2");
}

#[test]
fn test_initial_state_is_empty_board() {
    let board: Board = INITIAL_STATE.parse().unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(board.empty_positions().len(), 9);
}

#[test]
fn test_display_marks_and_numbers() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));
    assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

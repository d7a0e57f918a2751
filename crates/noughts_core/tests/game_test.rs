//! Tests for the game state machine.

use noughts_core::{Board, Game, GameStatus, MoveError, Player, Position, StateError};

fn play_all(game: &mut Game, moves: &[Position]) -> GameStatus {
    let mut status = game.status();
    for &pos in moves {
        status = game.make_move(pos).expect("legal move");
    }
    status
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn test_alternating_players() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    assert_eq!(game.to_move(), Player::O);
    game.make_move(Position::TopLeft).unwrap();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.turn(), 2);
    assert_eq!(game.board().state_string(), "200010000");
}

#[test]
fn test_place_occupied_square() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();

    let result = game.make_move(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_win_detection() {
    let mut game = Game::new();
    let status = play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ],
    );
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.status().winner(), Some(Player::X));
}

#[test]
fn test_draw_detection() {
    let mut game = Game::new();
    let status = play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(status, GameStatus::Draw);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut game = Game::new();
    // X O X / O X O / O X X: X fills the last square and completes the diagonal.
    let status = play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::MiddleRight,
            Position::Center,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_terminal_game_rejects_moves() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ],
    );
    assert_eq!(game.make_move(Position::BottomRight), Err(MoveError::GameOver));
}

#[test]
fn test_reset() {
    let mut game = Game::new();
    play_all(&mut game, &[Position::Center, Position::TopLeft]);
    game.reset();
    assert_eq!(game, Game::new());
}

#[test]
fn test_from_board_infers_player_to_move() {
    let game = Game::from_board("100000000".parse().unwrap()).unwrap();
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.turn(), 1);

    let game = Game::from_board("120000000".parse().unwrap()).unwrap();
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_from_board_recomputes_status() {
    let game = Game::from_board("111220000".parse().unwrap()).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    let game = Game::from_board("121211212".parse().unwrap()).unwrap();
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_from_board_rejects_unbalanced_marks() {
    let board: Board = "110000000".parse().unwrap();
    assert_eq!(
        Game::from_board(board),
        Err(StateError::UnbalancedMarks { x: 2, o: 0 })
    );

    let board: Board = "200000000".parse().unwrap();
    assert!(Game::from_board(board).is_err());
}

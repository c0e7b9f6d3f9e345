//! Tests for the board, rules, and validated game engine.

use tictactoe_core::{Game, GameState, GameStatus, Mark, MoveError, Position, Square};

fn play(game: &mut Game, moves: &[Position]) -> GameStatus {
    let mut status = game.state().status();
    for &pos in moves {
        status = game.make_move(pos).expect("legal move");
    }
    status
}

#[test]
fn test_move_count_matches_occupied_cells() {
    let mut game = Game::new();
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];

    for (played, &pos) in moves.iter().enumerate() {
        game.make_move(pos).unwrap();
        assert_eq!(game.state().move_count(), played + 1);
        assert_eq!(game.state().board().occupied_count(), played + 1);
    }
}

#[test]
fn test_win_via_top_row() {
    // X@(0,0), O@(1,1), X@(0,1), O@(2,2), X@(0,2) -> X wins the top row.
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(
        game.state().winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[
            Position::TopLeft,      // X
            Position::Center,       // O
            Position::TopRight,     // X
            Position::TopCenter,    // O
            Position::MiddleLeft,   // X
            Position::MiddleRight,  // O
            Position::BottomCenter, // X
            Position::BottomLeft,   // O
            Position::BottomRight,  // X
        ],
    );

    assert_eq!(status, GameStatus::Draw);
    assert!(game.state().board().is_full());
    assert_eq!(game.state().winning_line(), None);
}

#[test]
fn test_occupied_cell_rejection_is_idempotent() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();

    let before = game.state().clone();
    for _ in 0..3 {
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(game.state(), &before);
    }
}

#[test]
fn test_no_moves_accepted_after_game_over() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );
    assert!(game.state().status().is_terminal());

    let before = game.state().clone();
    assert_eq!(
        game.make_move(Position::MiddleLeft),
        Err(MoveError::GameOver)
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ],
    );

    game.reset();
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert_eq!(game.state().current_player(), Mark::X);
    assert_eq!(game.state().move_count(), 0);
    assert_eq!(game.state().board().occupied_count(), 0);
}

#[test]
fn test_cell_at_out_of_range() {
    let game = Game::new();
    assert_eq!(
        game.state().board().cell_at(3, 0),
        Err(MoveError::OutOfRange { row: 3, column: 0 })
    );
    assert_eq!(game.state().board().cell_at(0, 0), Ok(Square::Empty));
}

#[test]
fn test_win_on_anti_diagonal() {
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[
            Position::TopRight,
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ],
    );

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.state().winning_line(), Some(Position::ANTI_DIAGONAL));
}

#[test]
fn test_o_can_win() {
    let mut game = Game::new();
    let status = play(
        &mut game,
        &[
            Position::TopLeft,      // X
            Position::MiddleLeft,   // O
            Position::TopCenter,    // X
            Position::Center,       // O
            Position::BottomRight,  // X
            Position::MiddleRight,  // O wins the middle row
        ],
    );

    assert_eq!(status, GameStatus::Won(Mark::O));
}

#[test]
fn test_game_state_serde_round_trip() {
    let mut game = Game::new();
    play(&mut game, &[Position::Center, Position::TopLeft]);

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, game.state());
}

//! Tests for the typestate game architecture.

use tictactoe_core::{
    GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player, Position,
};

#[test]
fn test_typestate_lifecycle() {
    // Setup phase
    let game = GameSetup::new();

    // Start game
    let game = game.start(Player::X);
    assert_eq!(game.to_move(), Player::X);

    // Make moves
    let action = Move::new(Player::X, Position::Center);
    let result = game.make_move(action).expect("Valid move");

    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_contracts_prevent_invalid_moves() {
    let game = GameSetup::new().start(Player::X);

    // Valid move
    let action = Move::new(Player::X, Position::Center);
    let result = game.make_move(action);
    assert!(result.is_ok());

    let game = match result.unwrap() {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Unexpected finish"),
    };

    // Try to play same square - should fail
    let action = Move::new(Player::O, Position::Center);
    let result = game.make_move(action);
    assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::X);

    // Try to play as O when it's X's turn
    let action = Move::new(Player::O, Position::Center);
    let result = game.make_move(action);
    assert!(matches!(result, Err(MoveError::WrongPlayer(_))));
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::TopRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Player::O);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_win_detection() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight), // X wins top row
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::X));
            assert_eq!(game.outcome().winner(), Some(Player::X));
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    // X O X / O X X / O X O - board fills with no winner
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::TopCenter),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::MiddleRight),
        Move::new(Player::O, Position::BottomRight),
        Move::new(Player::X, Position::BottomCenter),
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw);
            assert!(game.outcome().is_draw());
            assert_eq!(game.history().len(), 9);
        }
        GameResult::InProgress(_) => panic!("Game should be a draw"),
    }
}

#[test]
fn test_restart_returns_empty_setup() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight),
    ];

    let finished = match GameInProgress::replay(&moves).expect("Valid replay") {
        GameResult::Finished(g) => g,
        GameResult::InProgress(_) => panic!("Game should be finished"),
    };

    let setup = finished.restart();
    let game = setup.start(Player::X);
    assert_eq!(game.to_move(), Player::X);
    assert!(game.history().is_empty());
    assert_eq!(game.valid_moves().len(), 9);
}

#[test]
fn test_o_first_game_playable_to_win() {
    let game = GameSetup::new().start(Player::O);
    assert_eq!(game.to_move(), Player::O);

    // O opens and takes the middle row while X follows
    let moves = [
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::MiddleRight),
    ];

    let mut result = GameResult::InProgress(game);
    for action in moves {
        result = match result {
            GameResult::InProgress(g) => g.make_move(action).expect("Legal move"),
            GameResult::Finished(_) => panic!("Game finished early"),
        };
    }

    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::O));
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_replay_from_o_first_history() {
    let moves = vec![
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::MiddleLeft),
    ];

    match GameInProgress::replay_from(Player::O, &moves).expect("Valid replay") {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 3);
            assert_eq!(game.to_move(), Player::X);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_valid_moves_shrink_as_board_fills() {
    let game = GameSetup::new().start(Player::X);
    assert_eq!(game.valid_moves().len(), 9);

    let game = match game.make_move(Move::new(Player::X, Position::Center)) {
        Ok(GameResult::InProgress(g)) => g,
        _ => panic!("Expected in-progress game"),
    };

    let valid = game.valid_moves();
    assert_eq!(valid.len(), 8);
    assert!(!valid.contains(&Position::Center));
}

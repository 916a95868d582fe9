//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, Square};
use crate::typestate::GameInProgress;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// Verified by replaying the move history and comparing boards.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        // Reconstruct board from history
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        // Reconstructed board must match current board
        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::Player;
    use crate::typestate::{GameResult, GameSetup};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start(Player::X);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = vec![
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::BottomLeft),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert!(MonotonicBoardInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_corrupted_board_violates() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        if let Ok(GameResult::InProgress(mut game)) = game.make_move(action) {
            // Overwrite an occupied square
            game.board.set(Position::Center, Square::Occupied(Player::O));

            assert!(!MonotonicBoardInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }
}

//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::typestate::GameInProgress;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition for the given move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition for the given move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};
    use crate::typestate::{GameResult, GameSetup};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        if let Ok(GameResult::InProgress(game)) = game.make_move(action) {
            let action2 = Move::new(Player::O, Position::Center);
            assert!(matches!(
                MoveContract::pre(&game, &action2),
                Err(MoveError::SquareOccupied(_))
            ));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::X);
        // O plays when it's X's turn
        let action = Move::new(Player::O, Position::Center);

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        if let Ok(GameResult::InProgress(after)) = game.clone().make_move(action) {
            assert!(MoveContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) {
            // Corrupt the board behind the engine's back
            after.board.set(Position::TopLeft, Square::Occupied(Player::O));

            assert!(MoveContract::post(&game, &after).is_err());
        } else {
            panic!("Expected in-progress game");
        }
    }
}

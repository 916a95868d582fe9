//! Mutable game engine for tic-tac-toe.
//!
//! This is the simple entry point for front ends: one owned value,
//! `make_move` and `reset`. Rejected moves leave the state untouched.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given position for the current player.
    ///
    /// On success the mark is placed, win/draw detection runs, and the
    /// turn passes to the opponent if the game continues.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the game has ended and
    /// `MoveError::SquareOccupied` if the square is taken. The state is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state.status() != &GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);
        self.update_status();

        debug!(move_count = self.state.move_count(), "Move applied");
        Ok(())
    }

    /// Resets the game to its initial state: empty board, X to move,
    /// empty history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        }
    }
}

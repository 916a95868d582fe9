//! Phase-typed game engine for tic-tac-toe.
//!
//! Each phase is its own distinct type with phase-specific fields, so
//! the {Playing -> Won | Drawn -> Reset -> Playing} state machine is
//! enforced at compile time: a `GameFinished` has no move method, and
//! its outcome is never an `Option`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::phases::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty. No history, no outcome.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (square empty, player's turn)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns the precondition failure; `self` is consumed but no
    /// observable state was produced, so nothing mutated.
    #[instrument(skip(self), fields(player = %action.player, position = %action.position))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        // Precondition: check contract
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        // Apply move
        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        // Check for win
        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(winner),
            }));
        }

        // Check for draw
        if rules::is_full(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        // Continue game
        game.to_move = game.to_move.opponent();

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open for a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from the initial state (X to move first).
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        Self::replay_from(Player::X, moves)
    }

    /// Replays moves from an initial state where `first_player` opens.
    #[instrument]
    pub fn replay_from(first_player: Player, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(first_player);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// There is no move method on this type; the only transition out is
/// [`restart`](GameFinished::restart).
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns an empty setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

//! Serializable game wrapper for typestate phases.

use crate::action::Move;
use crate::phases::Outcome;
use crate::position::Position;
use crate::types::{Board, Player};
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Serializable wrapper over a game in any phase.
///
/// Typestate phases can't be directly serialized, so this enum carries
/// the state a front end needs to render the game, and can be fed back
/// in to continue play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in setup phase.
    Setup {
        /// The board state.
        board: Board,
    },
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Current player to move.
        to_move: Player,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game finished.
    Finished {
        /// The board state.
        board: Board,
        /// The outcome.
        outcome: Outcome,
        /// Move history.
        history: Vec<Move>,
    },
}

impl From<GameSetup> for AnyGame {
    fn from(game: GameSetup) -> Self {
        AnyGame::Setup {
            board: game.board().clone(),
        }
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            board: game.board().clone(),
            to_move: game.to_move(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished {
            board: game.board().clone(),
            outcome: *game.outcome(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Setup { board } => board,
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any game phase (as positions).
    pub fn history(&self) -> Vec<Position> {
        match self {
            AnyGame::Setup { .. } => vec![],
            AnyGame::InProgress { history, .. } | AnyGame::Finished { history, .. } => {
                history.iter().map(|m| m.position).collect()
            }
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::Setup { .. } => "Ready to start".to_string(),
            AnyGame::InProgress { to_move, .. } => {
                format!("In progress. Player {} to move.", to_move)
            }
            AnyGame::Finished { outcome, .. } => match outcome {
                Outcome::Winner(player) => format!("Game over. Player {} wins!", player),
                Outcome::Draw => "Game over. Draw!".to_string(),
            },
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished { .. })
    }

    /// Returns the current player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Finished {
                outcome: Outcome::Winner(player),
                ..
            } => Some(*player),
            _ => None,
        }
    }

    /// Starts a setup-phase game, keeping the wrapper representation.
    ///
    /// # Errors
    ///
    /// Returns an error string if the game has already started.
    pub fn start(self, first_player: Player) -> Result<Self, String> {
        match self {
            AnyGame::Setup { .. } => Ok(GameSetup::new().start(first_player).into()),
            _ => Err("Game has already started".to_string()),
        }
    }

    /// Makes a move on a phase-erased game.
    ///
    /// The stored history is replayed through the contract-checked
    /// typestate engine, so a corrupted wrapper cannot smuggle in an
    /// illegal state.
    #[instrument(skip(self))]
    pub fn make_move_action(self, action: Move) -> Result<Self, String> {
        match self {
            AnyGame::InProgress {
                board: _,
                to_move,
                mut history,
            } => {
                // The first mover defines the turn rotation; an empty
                // history means the stored to_move is about to open.
                let first_player = history.first().map(|m| m.player).unwrap_or(to_move);
                history.push(action);

                debug!(
                    move_count = history.len(),
                    "Replaying moves with contract validation"
                );

                match GameInProgress::replay_from(first_player, &history) {
                    Ok(result) => Ok(result.into()),
                    Err(e) => {
                        warn!(error = %e, "Contract validation failed");
                        Err(e.to_string())
                    }
                }
            }
            AnyGame::Setup { .. } => Err("Game hasn't started yet".to_string()),
            AnyGame::Finished { .. } => Err("Game is already over".to_string()),
        }
    }

    /// Resets a finished game back to setup, keeping the wrapper
    /// representation.
    pub fn reset(self) -> Self {
        GameSetup::new().into()
    }
}

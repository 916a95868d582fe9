//! Tic-tac-toe game-state library.
//!
//! Board representation, move validation, and win/draw detection for a
//! fixed 3x3 board, with no UI, networking, or persistence attached.
//!
//! # Architecture
//!
//! - **Types**: `Board`, `Player`, `Square`, `GameState` - the data model
//! - **Game**: mutable engine with `make_move` / `reset` for simple callers
//! - **Typestate**: `GameSetup` / `GameInProgress` / `GameFinished` - the
//!   game phase encoded in the type, so a finished game has no move method
//! - **Contracts**: pre/postcondition validation for moves
//! - **Invariants**: first-class, independently testable game properties
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Position::Center)?;      // X
//! game.make_move(Position::TopLeft)?;     // O
//! assert_eq!(game.state().status(), &GameStatus::InProgress);
//! game.reset();
//! assert_eq!(game.state().move_count(), 0);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod game;
mod invariants;
mod phases;
mod position;
mod rules;
mod types;
mod typestate;
mod wrapper;

// Crate-level exports - Core domain types
pub use types::{Board, GameState, GameStatus, Player, Square};

// Crate-level exports - Positions and moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Mutable engine
pub use game::Game;

// Crate-level exports - Typestate engine
pub use phases::Outcome;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - Contracts
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Phase-erased serializable wrapper
pub use wrapper::AnyGame;

// Crate-level exports - Rule functions
pub use rules::{check_winner, is_draw, is_full};

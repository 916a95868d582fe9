//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the mutable engine, the typestate engine, and the
//! contract system can all share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

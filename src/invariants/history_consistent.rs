//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::types::Square;
use crate::typestate::GameInProgress;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history_len = game.history().len();

        let occupied_count = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        history_len == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

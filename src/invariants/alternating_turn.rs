//! Alternating turn invariant: players take turns strictly.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: Players alternate turns.
///
/// Move history must alternate strictly, and `to_move` must agree with
/// the first mover and the history length. Either player may open the
/// game; the first entry in history defines the rotation.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return true;
        };

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // Current to_move must be correct
        let expected_next = if history.len() % 2 == 0 {
            first.player
        } else {
            first.player.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

//! Turn invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X moves next exactly when X and O have the same number of marks.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameState> for TurnMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let even = state.board().count(Player::X) == state.board().count(Player::O);
        (state.next_player() == Player::X) == even
    }

    fn description() -> &'static str {
        "X moves next exactly when mark counts are equal"
    }
}

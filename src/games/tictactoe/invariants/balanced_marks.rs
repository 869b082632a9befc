//! Balanced marks invariant: X leads O by zero or one mark.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a state without the count check `from_board` applies.
    fn unchecked(text: &str) -> GameState {
        let mut state = GameState::new();
        *state.board_mut() = text.parse().unwrap();
        state
    }

    #[test]
    fn test_holds_for_parsed_boards() {
        for text in [".........", "X........", "X...O....", "XOXOXOXOX"] {
            let state = GameState::from_board(text.parse().unwrap()).unwrap();
            assert!(BalancedMarksInvariant::holds(&state), "{text}");
        }
    }

    #[test]
    fn test_detects_o_ahead() {
        let state = unchecked("O........");
        assert!(!BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_detects_x_two_ahead() {
        let state = unchecked("XX.......");
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}

//! Winner invariant: the stored winner is the board's winner.

use super::super::rules::detect_winner;
use super::super::GameState;
use super::Invariant;

/// Invariant: the stored winner agrees with a fresh scan of the board.
pub struct WinnerMatchesBoardInvariant;

impl Invariant<GameState> for WinnerMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.winner() == detect_winner(state.board())
    }

    fn description() -> &'static str {
        "Stored winner matches the board"
    }
}

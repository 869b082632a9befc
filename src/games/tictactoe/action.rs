//! Move outcomes for tic-tac-toe.
//!
//! A move attempt either commits, is turned away by the opening advisor, or
//! is ignored. Ignored moves carry a [`MoveError`] saying why.

use super::{GameState, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move attempt was ignored.
///
/// None of these are faults; the caller returns the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a move attempt that reached the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The mark was placed and the turn passed.
    Applied(GameState),
    /// The opening advisor turned the move away; only the advisory changed.
    Rejected(GameState),
}

impl Transition {
    /// Returns the resulting state.
    pub fn into_state(self) -> GameState {
        match self {
            Transition::Applied(state) | Transition::Rejected(state) => state,
        }
    }

    /// Borrows the resulting state.
    pub fn state(&self) -> &GameState {
        match self {
            Transition::Applied(state) | Transition::Rejected(state) => state,
        }
    }

    /// Whether the mark was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

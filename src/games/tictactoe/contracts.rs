//! Contract-based validation for move attempts.
//!
//! Preconditions decide whether a move reaches the rules at all.
//! The postcondition re-checks the game invariants after a commit.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::{GameState, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Value the precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the index names a board cell.
pub struct InBounds;

impl InBounds {
    /// Converts the raw index into a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once a winner is recorded.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.winner() {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if the square is taken.
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Contract for move attempts by raw cell index.
///
/// Preconditions:
/// - Index is 0-8
/// - Game is not over
/// - Square is empty
///
/// Postconditions:
/// - Every invariant in [`TicTacToeInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    #[instrument(skip(state))]
    fn pre(state: &GameState, index: &usize) -> Result<Position, MoveError> {
        let pos = InBounds::check(*index)?;
        GameNotOver::check(state)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }

    fn post(after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert_eq!(MoveContract::pre(&state, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let state = GameState::new();
        assert_eq!(MoveContract::pre(&state, &9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::from_board("X........".parse().unwrap()).unwrap();
        assert_eq!(
            MoveContract::pre(&state, &0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_before_occupancy() {
        let state = GameState::from_board("XXXOO....".parse().unwrap()).unwrap();
        assert_eq!(MoveContract::pre(&state, &0), Err(MoveError::GameOver));
        assert_eq!(MoveContract::pre(&state, &8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut state = GameState::new();
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        let violations = MoveContract::post(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}

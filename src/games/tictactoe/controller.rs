//! Move controller: the only way a [`GameState`] changes.

use super::action::{MoveError, Transition};
use super::contracts::{Contract, MoveContract};
use super::opening::OpeningAdvisor;
use super::{AdvisoryPolicy, GameState, Player};
use tracing::{debug, info, instrument, warn};

/// Applies move attempts to game states.
///
/// Each call takes a state by value and returns the next one, so the caller
/// owns serialization of moves (see [`SharedGame`](crate::SharedGame)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveController {
    policy: AdvisoryPolicy,
}

impl MoveController {
    /// Creates a controller with the given advisory policy.
    pub fn new(policy: AdvisoryPolicy) -> Self {
        Self { policy }
    }

    /// Returns the advisory policy.
    pub fn policy(&self) -> AdvisoryPolicy {
        self.policy
    }

    /// Attempts a move, reporting why it was ignored if it never reached the rules.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the index is out of range, the game is won,
    /// or the square is taken. The input state is dropped in that case;
    /// [`attempt_move`](Self::attempt_move) keeps it.
    #[instrument(skip(self, state), fields(next = %state.next_player()))]
    pub fn try_move(&self, state: GameState, index: usize) -> Result<Transition, MoveError> {
        let pos = MoveContract::pre(&state, &index)?;

        let advice = match state.next_player() {
            Player::X => OpeningAdvisor::evaluate_move(state.board(), pos),
            Player::O => None,
        };

        let mut next = state;
        match advice {
            Some(advice) if !advice.accepted() => {
                debug!(%pos, "Opening advisor rejected move");
                next.set_advisory(Some(advice.message().to_string()));
                return Ok(Transition::Rejected(next));
            }
            Some(advice) => next.set_advisory(Some(advice.message().to_string())),
            None => {
                if self.policy == AdvisoryPolicy::Clear {
                    next.set_advisory(None);
                }
            }
        }

        next.apply_move(pos);
        debug!(%pos, winner = ?next.winner(), "Move applied");

        if let Err(violations) = MoveContract::post(&next) {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
        }

        Ok(Transition::Applied(next))
    }

    /// Attempts a move at `index` (0-8) and returns the resulting state.
    ///
    /// Out-of-range indices, occupied squares and moves after a win are
    /// no-ops that return `state` untouched. A move the opening advisor
    /// rejects only updates the advisory message.
    pub fn attempt_move(&self, state: GameState, index: usize) -> GameState {
        let fallback = state.clone();
        match self.try_move(state, index) {
            Ok(transition) => transition.into_state(),
            Err(e) => {
                debug!(error = %e, index, "Move ignored");
                fallback
            }
        }
    }

    /// Returns the initial state: empty board, X to move, no advisory.
    #[instrument(skip(self))]
    pub fn reset_game(&self) -> GameState {
        info!("Game reset");
        GameState::new()
    }
}

/// [`MoveController::attempt_move`] with the default (persisting) advisory policy.
pub fn attempt_move(state: GameState, index: usize) -> GameState {
    MoveController::default().attempt_move(state, index)
}

/// Returns a fresh initial state.
pub fn reset_game() -> GameState {
    MoveController::default().reset_game()
}

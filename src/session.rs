//! Shared game handle for callers that expose the core as a service.

use crate::games::tictactoe::{GameState, MoveController};
use derive_more::{Display, Error};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A game whose moves are serialized behind a mutex.
///
/// The occupancy check and the placement run under one lock, so concurrent
/// callers never interleave inside a move. Clones share the same game.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    controller: MoveController,
    state: Arc<Mutex<GameState>>,
}

impl SharedGame {
    /// Creates a new shared game using `controller` for every move.
    #[instrument]
    pub fn new(controller: MoveController) -> Self {
        Self {
            controller,
            state: Arc::new(Mutex::new(GameState::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState>, SessionError> {
        self.state.lock().map_err(|e| {
            warn!(error = %e, "Game lock poisoned");
            SessionError::new(format!("Game lock poisoned: {}", e))
        })
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> Result<GameState, SessionError> {
        Ok(self.lock()?.clone())
    }

    /// Attempts a move atomically and returns the resulting state.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, index: usize) -> Result<GameState, SessionError> {
        let mut guard = self.lock()?;
        let next = self.controller.attempt_move(guard.clone(), index);
        *guard = next.clone();
        Ok(next)
    }

    /// Resets the game and returns the initial state.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<GameState, SessionError> {
        let mut guard = self.lock()?;
        *guard = self.controller.reset_game();
        Ok(guard.clone())
    }
}

//! Strictly Coach - tic-tac-toe with an opening rulebook for player X
//!
//! The core is a deterministic reducer: a move attempt takes a
//! [`GameState`] and a cell index and returns the next state.
//!
//! # Architecture
//!
//! - **Games**: board types, win detection, opening advisor, move controller
//! - **Session**: mutex-guarded game for callers that share one board
//! - **Config**: TOML configuration (advisory policy, log filter)
//!
//! # Example
//!
//! ```
//! use strictly_coach::{attempt_move, reset_game};
//!
//! let state = reset_game();
//! let state = attempt_move(state, 4);
//! assert_eq!(state.advisory(), Some("Not a good choice!"));
//!
//! let state = attempt_move(state, 0);
//! assert_eq!(state.advisory(), Some("Good choice!"));
//! assert_eq!(state.status_line(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{CoachConfig, ConfigError};

// Crate-level exports - Session management
pub use session::{SessionError, SharedGame};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Advice, AdvisoryPolicy, AlignedCorner, BalancedMarksInvariant, Board, BoardParseError, Contract,
    GOOD_CHOICE, GameNotOver, GameState, GameStatus, InBounds, Invariant, InvariantSet,
    InvariantViolation, MoveContract, MoveController, MoveError, NOT_A_GOOD_CHOICE, OpeningAdvisor,
    OpeningPhase, Player, Position, SecondMoveRule, Square, SquareIsEmpty, TicTacToeInvariants,
    Transition, TurnMatchesBoardInvariant, Verdict, WinnerMatchesBoardInvariant, aligned_corners,
    attempt_move, detect_winner, is_corner, is_full, opposite_corner, reset_game, winning_line,
};

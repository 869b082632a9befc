//! Tic-tac-toe with an opening coach for player X.

mod action;
mod contracts;
mod controller;
mod invariants;
mod opening;
mod position;
mod rules;
mod types;

pub use action::{MoveError, Transition};
pub use contracts::{Contract, GameNotOver, InBounds, MoveContract, SquareIsEmpty};
pub use controller::{MoveController, attempt_move, reset_game};
pub use invariants::{
    BalancedMarksInvariant, Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants,
    TurnMatchesBoardInvariant, WinnerMatchesBoardInvariant,
};
pub use opening::rulebook::{AlignedCorner, aligned_corners, is_corner, opposite_corner};
pub use opening::{
    Advice, GOOD_CHOICE, NOT_A_GOOD_CHOICE, OpeningAdvisor, OpeningPhase, SecondMoveRule, Verdict,
};
pub use position::Position;
pub use rules::{detect_winner, is_full, winning_line};
pub use types::{AdvisoryPolicy, Board, BoardParseError, GameState, GameStatus, Player, Square};

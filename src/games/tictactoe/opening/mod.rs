//! Opening advisor for player X.
//!
//! X's first two moves are checked against a fixed rulebook. The rulebook is
//! expressed as a dispatch on [`OpeningPhase`] and [`SecondMoveRule`], with
//! the corner tables kept as data in [`rulebook`].

pub mod rulebook;

use super::{Board, Player, Position, Square};
use rulebook::{aligned_corners, is_corner, opposite_corner};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Message shown when the advisor accepts a move.
pub const GOOD_CHOICE: &str = "Good choice!";

/// Message shown when the advisor rejects a move.
pub const NOT_A_GOOD_CHOICE: &str = "Not a good choice!";

/// Accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The move follows the rulebook.
    Accept,
    /// The move is discarded; X must choose again.
    Reject,
}

impl Verdict {
    fn from_bool(accepted: bool) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

/// Advisor response for a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Advice {
    verdict: Verdict,
}

impl Advice {
    /// Wraps a verdict.
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    /// Returns the verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Whether the move may be played.
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Accept
    }

    /// Feedback for the player.
    pub fn message(&self) -> &'static str {
        match self.verdict {
            Verdict::Accept => GOOD_CHOICE,
            Verdict::Reject => NOT_A_GOOD_CHOICE,
        }
    }
}

/// Which part of X's opening the board is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpeningPhase {
    /// X has not moved yet.
    FirstMove,
    /// X has exactly one mark on the board.
    SecondMove {
        /// Where X's first mark is.
        first_x: Position,
    },
}

impl OpeningPhase {
    /// Phase for the board, or `None` once X has two or more marks.
    ///
    /// Says nothing about whose turn it is; the controller checks that.
    #[instrument(skip(board))]
    pub fn detect(board: &Board) -> Option<Self> {
        match board.count(Player::X) {
            0 => Some(OpeningPhase::FirstMove),
            1 => board
                .first_of(Player::X)
                .map(|first_x| OpeningPhase::SecondMove { first_x }),
            _ => None,
        }
    }
}

/// Rule governing X's second move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondMoveRule {
    /// O holds the center: X must take the diagonally opposite corner.
    OppositeCorner,
    /// Center is not O: X must take an aligned corner with an open cell between.
    AlignedCorner,
}

impl SecondMoveRule {
    /// Picks the rule from center occupancy.
    pub fn for_board(board: &Board) -> Self {
        if board.get(Position::Center) == Square::Occupied(Player::O) {
            SecondMoveRule::OppositeCorner
        } else {
            SecondMoveRule::AlignedCorner
        }
    }

    /// Applies the rule to a candidate.
    ///
    /// A `first_x` outside the corner set has no options and rejects everything.
    pub fn check(self, board: &Board, first_x: Position, candidate: Position) -> Verdict {
        match self {
            SecondMoveRule::OppositeCorner => {
                Verdict::from_bool(opposite_corner(first_x) == Some(candidate))
            }
            SecondMoveRule::AlignedCorner => {
                let accepted = aligned_corners(first_x)
                    .iter()
                    .find(|option| option.corner == candidate)
                    .is_some_and(|option| {
                        let between = board.get(option.between);
                        option.between != Position::Center
                            && between != Square::Occupied(Player::O)
                            && between == Square::Empty
                    });
                Verdict::from_bool(accepted)
            }
        }
    }
}

/// Checks X's opening moves against the rulebook.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningAdvisor;

impl OpeningAdvisor {
    /// Evaluates `candidate` for the given phase.
    #[instrument(skip(board))]
    pub fn evaluate(phase: OpeningPhase, board: &Board, candidate: Position) -> Advice {
        let verdict = match phase {
            OpeningPhase::FirstMove => Verdict::from_bool(is_corner(candidate)),
            OpeningPhase::SecondMove { first_x } => {
                let rule = SecondMoveRule::for_board(board);
                debug!(?rule, %first_x, "Second-move rule selected");
                rule.check(board, first_x, candidate)
            }
        };
        debug!(?verdict, %candidate, "Opening verdict");
        Advice::new(verdict)
    }

    /// Evaluates `candidate` against the board's current opening phase.
    ///
    /// Returns `None` when X already has two or more marks and the rulebook
    /// no longer applies.
    #[instrument(skip(board))]
    pub fn evaluate_move(board: &Board, candidate: Position) -> Option<Advice> {
        OpeningPhase::detect(board).map(|phase| Self::evaluate(phase, board, candidate))
    }
}

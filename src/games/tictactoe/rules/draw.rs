//! Full-board detection for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// The core has no draw state; callers use this to stop asking for moves.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::detect_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board_without_winner() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(detect_winner(&board), None);
    }
}

//! Tests for the opening rulebook, checked against every cell.

use strictly_coach::{
    Board, OpeningAdvisor, OpeningPhase, Position, SecondMoveRule, Verdict, aligned_corners,
    is_corner, opposite_corner,
};
use strum::IntoEnumIterator;

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_aligned_table() {
    let table = [
        (0, [(2, 1), (6, 3)]),
        (2, [(0, 1), (8, 5)]),
        (6, [(0, 3), (8, 7)]),
        (8, [(2, 5), (6, 7)]),
    ];
    for (first, options) in table {
        let first = Position::from_index(first).unwrap();
        let found: Vec<_> = aligned_corners(first)
            .iter()
            .map(|o| (o.corner.to_index(), o.between.to_index()))
            .collect();
        assert_eq!(found, options.to_vec(), "first X at {first}");
    }
}

#[test]
fn test_second_move_with_center_o_accepts_only_opposite() {
    for first in Position::iter().filter(|p| is_corner(*p)) {
        let mut text = ['.'; 9];
        text[first.to_index()] = 'X';
        text[4] = 'O';
        let b = board(&text.iter().collect::<String>());
        let phase = OpeningPhase::detect(&b).unwrap();

        for candidate in Position::valid_moves(&b) {
            let advice = OpeningAdvisor::evaluate(phase, &b, candidate);
            assert_eq!(
                advice.accepted(),
                opposite_corner(first) == Some(candidate),
                "first {first}, candidate {candidate}"
            );
        }
    }
}

#[test]
fn test_second_move_with_open_center_accepts_only_open_aligned_corners() {
    for first in Position::iter().filter(|p| is_corner(*p)) {
        let mut text = ['.'; 9];
        text[first.to_index()] = 'X';
        let b = board(&text.iter().collect::<String>());
        let phase = OpeningPhase::detect(&b).unwrap();
        assert_eq!(SecondMoveRule::for_board(&b), SecondMoveRule::AlignedCorner);

        let accepted: Vec<_> = Position::valid_moves(&b)
            .into_iter()
            .filter(|c| OpeningAdvisor::evaluate(phase, &b, *c).verdict() == Verdict::Accept)
            .collect();
        let expected: Vec<_> = aligned_corners(first).iter().map(|o| o.corner).collect();
        assert_eq!(accepted.len(), 2);
        for corner in expected {
            assert!(accepted.contains(&corner), "first {first}, corner {corner}");
        }
    }
}

#[test]
fn test_x_in_center_counts_as_center_not_o() {
    // Only reachable by building the board by hand.
    let b = board("....X....");
    assert_eq!(SecondMoveRule::for_board(&b), SecondMoveRule::AlignedCorner);
    let phase = OpeningPhase::detect(&b).unwrap();
    for candidate in Position::valid_moves(&b) {
        assert!(!OpeningAdvisor::evaluate(phase, &b, candidate).accepted());
    }
}

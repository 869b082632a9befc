//! Static lookup data for the opening rulebook.

use super::super::Position;

/// Corners accepted for X's first move.
pub const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Diagonal pairing used when O answers in the center.
pub const OPPOSITE_CORNERS: [(Position, Position); 4] = [
    (Position::TopLeft, Position::BottomRight),
    (Position::BottomRight, Position::TopLeft),
    (Position::TopRight, Position::BottomLeft),
    (Position::BottomLeft, Position::TopRight),
];

/// Corners sharing a row or column with the first X, each with the cell
/// lying between the two corners.
pub const ALIGNED_CORNERS: [(Position, [AlignedCorner; 2]); 4] = [
    (
        Position::TopLeft,
        [
            AlignedCorner::new(Position::TopRight, Position::TopCenter),
            AlignedCorner::new(Position::BottomLeft, Position::MiddleLeft),
        ],
    ),
    (
        Position::TopRight,
        [
            AlignedCorner::new(Position::TopLeft, Position::TopCenter),
            AlignedCorner::new(Position::BottomRight, Position::MiddleRight),
        ],
    ),
    (
        Position::BottomLeft,
        [
            AlignedCorner::new(Position::TopLeft, Position::MiddleLeft),
            AlignedCorner::new(Position::BottomRight, Position::BottomCenter),
        ],
    ),
    (
        Position::BottomRight,
        [
            AlignedCorner::new(Position::TopRight, Position::MiddleRight),
            AlignedCorner::new(Position::BottomLeft, Position::BottomCenter),
        ],
    ),
];

/// A second-move corner and the cell that must stay open on the way to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedCorner {
    /// Corner X may take.
    pub corner: Position,
    /// Cell between the first X and `corner`.
    pub between: Position,
}

impl AlignedCorner {
    const fn new(corner: Position, between: Position) -> Self {
        Self { corner, between }
    }
}

/// Returns true for the four corner cells.
pub fn is_corner(pos: Position) -> bool {
    CORNERS.contains(&pos)
}

/// Corner diagonally opposite `pos`; `None` if `pos` is not a corner.
pub fn opposite_corner(pos: Position) -> Option<Position> {
    OPPOSITE_CORNERS
        .iter()
        .find(|(from, _)| *from == pos)
        .map(|(_, to)| *to)
}

/// Aligned corner options for `first_x`; empty if `first_x` is not a corner.
pub fn aligned_corners(first_x: Position) -> &'static [AlignedCorner] {
    ALIGNED_CORNERS
        .iter()
        .find(|(from, _)| *from == first_x)
        .map(|(_, options)| options.as_slice())
        .unwrap_or(&[])
}

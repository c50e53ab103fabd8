//! Movement patterns: which offsets count as adjacent.

use crate::geom::Point;

const FOUR_WAY: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

// Cardinal offsets first, then diagonals. Neighbor order decides which of
// several equal-cost paths a search returns, so it must stay fixed.
const EIGHT_WAY: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// The set of coordinate offsets considered adjacent to a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Orthogonal steps only.
    #[default]
    FourWay,
    /// Orthogonal and diagonal steps.
    EightWay,
    /// Caller-supplied offsets, used in the given order.
    Custom(Vec<Point>),
}

impl Movement {
    /// The offsets of this pattern in enumeration order.
    #[inline]
    pub fn offsets(&self) -> &[Point] {
        match self {
            Self::FourWay => &FOUR_WAY[..],
            Self::EightWay => &EIGHT_WAY[..],
            Self::Custom(offsets) => offsets.as_slice(),
        }
    }
}

impl From<Vec<Point>> for Movement {
    fn from(offsets: Vec<Point>) -> Self {
        Self::Custom(offsets)
    }
}

/// Whether a step by `offset` is charged as a diagonal step.
///
/// Any step whose L1 length exceeds 1 counts, so long custom offsets such
/// as `(2, 0)` are charged like diagonals too.
#[inline]
pub fn is_diagonal_step(offset: Point) -> bool {
    offset.l1() > 1
}

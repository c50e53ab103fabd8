//! The [`Cell`] type: one grid position with walkability and terrain cost.

use crate::geom::Point;

/// Terrain cost of a cell unless told otherwise.
pub const DEFAULT_COST: f64 = 1.0;

/// A single grid cell.
///
/// `cost` multiplies the base cost of any step that enters this cell. Cells
/// built by the [`Grid`](crate::Grid) constructors always have `cost > 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub walkable: bool,
    pub cost: f64,
}

impl Cell {
    /// A walkable cell at `pos` with the default cost.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            walkable: true,
            cost: DEFAULT_COST,
        }
    }

    /// Set walkability (builder).
    #[inline]
    pub const fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Set the terrain cost (builder).
    #[inline]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Cell derived from a raw terrain cost: walkable iff `cost > 0`.
    ///
    /// Non-positive (and NaN) costs produce an unwalkable cell with the
    /// default cost.
    pub fn from_cost(pos: Point, cost: f64) -> Self {
        if cost > 0.0 {
            Self::new(pos).with_cost(cost)
        } else {
            Self::new(pos).with_walkable(false)
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let c = Cell::new(Point::new(2, 3)).with_walkable(false).with_cost(4.0);
        assert_eq!(c.pos, Point::new(2, 3));
        assert!(!c.walkable);
        assert_eq!(c.cost, 4.0);
    }

    #[test]
    fn from_cost_coerces_non_positive() {
        let p = Point::new(1, 1);
        assert_eq!(Cell::from_cost(p, 2.5), Cell::new(p).with_cost(2.5));
        for bad in [0.0, -1.0, f64::NAN] {
            let c = Cell::from_cost(p, bad);
            assert!(!c.walkable);
            assert_eq!(c.cost, DEFAULT_COST);
        }
    }
}

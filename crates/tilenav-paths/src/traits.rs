use tilenav_core::{Point, Range};

/// Minimal pathfinding interface: bounds, passability and neighbor enumeration.
pub trait Pather {
    /// Rectangle containing every position the search may visit.
    fn bounds(&self) -> Range;

    /// Whether `p` may be entered. Start and goal must both be passable.
    fn passable(&self, p: Point) -> bool;

    /// Append passable neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}

//! [`GridPather`]: the pather traits implemented for a [`Grid`].

use tilenav_core::{Grid, Movement, Point, Range};

use crate::config::SearchConfig;
use crate::cost::step_cost;
use crate::distance::Heuristic;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A borrowed [`Grid`] searched under a movement pattern, heuristic and
/// diagonal step cost.
#[derive(Clone, Copy, Debug)]
pub struct GridPather<'a> {
    pub grid: &'a Grid,
    pub movement: &'a Movement,
    pub heuristic: Heuristic,
    pub diagonal_cost: f64,
}

impl<'a> GridPather<'a> {
    /// Pather for `grid` using the settings in `config`.
    pub fn new(grid: &'a Grid, config: &'a SearchConfig) -> Self {
        Self {
            grid,
            movement: &config.movement,
            heuristic: config.heuristic,
            diagonal_cost: config.diagonal_cost,
        }
    }
}

impl Pather for GridPather<'_> {
    #[inline]
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.is_walkable(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.grid.neighbors_into(p, self.movement, buf);
    }
}

impl WeightedPather for GridPather<'_> {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        step_cost(self.grid, from, to, self.diagonal_cost)
    }
}

impl AstarPather for GridPather<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.heuristic.estimate(from, to)
    }
}

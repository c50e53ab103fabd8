//! Range-limited search: a path only if it fits a movement budget.

use log::debug;
use tilenav_core::{Grid, Point};

use crate::astar::{Path, astar};
use crate::config::SearchConfig;
use crate::cost::path_cost;

/// A* on `grid`, keeping the result only if its total cost is at most
/// `max_range`.
///
/// The search itself is unbounded. With an admissible heuristic it returns
/// the cheapest path, so a path over budget means no path within budget
/// exists. The cost is re-summed from the path with the same step-cost rule
/// the search uses (see [`path_cost`]).
pub fn astar_with_max_range(
    grid: &Grid,
    start: Point,
    goal: Point,
    max_range: f64,
    config: &SearchConfig,
) -> Option<Path> {
    let path = astar(grid, start, goal, config)?;
    let cost = path_cost(grid, &path, config.diagonal_cost);
    if cost <= max_range {
        Some(path)
    } else {
        debug!("path {start} -> {goal} costs {cost:.3}, over budget {max_range}");
        None
    }
}

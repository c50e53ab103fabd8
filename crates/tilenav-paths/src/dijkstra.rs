use std::collections::HashMap;

use log::debug;
use tilenav_core::{Grid, Point};

use crate::astar::{Path, best_first};
use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::gridpather::GridPather;
use crate::traits::WeightedPather;

/// Compute the cheapest path from `from` to `to` with uniform-cost search
/// over any [`WeightedPather`].
pub fn dijkstra_path<P: WeightedPather>(pather: &P, from: Point, to: Point) -> Option<Path> {
    best_first(pather, from, to, |_, _| 0.0)
}

/// Dijkstra on a [`Grid`]: A* with a zero heuristic.
///
/// `config.heuristic` is ignored; the movement pattern and diagonal cost
/// are used as given.
pub fn dijkstra(grid: &Grid, start: Point, goal: Point, config: &SearchConfig) -> Option<Path> {
    dijkstra_path(&GridPather::new(grid, config), start, goal)
}

/// Compute a single-source Dijkstra cost map.
///
/// Expands from `source` in cost order and records every position whose
/// accumulated cost stays within `max_cost`, paired with its lowest cost.
/// The source itself is always recorded at `0.0`. Returns an empty map if
/// `source` is outside the pather's bounds or impassable.
pub fn dijkstra_map<P: WeightedPather>(
    pather: &P,
    source: Point,
    max_cost: f64,
) -> HashMap<Point, f64> {
    let bounds = pather.bounds();
    if !bounds.contains(source) || !pather.passable(source) {
        return HashMap::new();
    }

    let mut frontier = Frontier::new(bounds);
    frontier.relax(source, None, 0.0, 0.0);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = frontier.pop() {
        let (cp, current_g) = {
            let n = frontier.node(current);
            (n.pos, n.g)
        };
        frontier.close(current);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let tentative = current_g + pather.cost(cp, np);
            if tentative > max_cost {
                continue;
            }
            frontier.relax(np, Some(current), tentative, 0.0);
        }
    }

    let reached: HashMap<Point, f64> = frontier.recorded().collect();
    debug!(
        "flood from {source} within {max_cost}: {} reached, {} expanded",
        reached.len(),
        frontier.expanded
    );
    reached
}

/// Every position reachable from `start` on `grid` within a cost budget of
/// `max_range`, mapped to its cheapest cost.
///
/// Uses the movement pattern and diagonal cost from `config`; the heuristic
/// is irrelevant since there is no goal. `start` maps to `0.0` whenever it
/// is in bounds and walkable, otherwise the map is empty.
pub fn find_reachable_cells(
    grid: &Grid,
    start: Point,
    max_range: f64,
    config: &SearchConfig,
) -> HashMap<Point, f64> {
    dijkstra_map(&GridPather::new(grid, config), start, max_range)
}

use log::{debug, trace};
use tilenav_core::{Grid, Point};

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::gridpather::GridPather;
use crate::traits::{AstarPather, WeightedPather};

/// An ordered sequence of positions from start to goal, both inclusive.
pub type Path = Vec<Point>;

/// Best-first search shared by A* and Dijkstra.
///
/// `estimate` supplies the h-cost; a constant zero makes this uniform-cost
/// search. Frontier entries are never updated in place: every improvement
/// pushes a new node and outdated entries are discarded when popped.
pub(crate) fn best_first<P: WeightedPather>(
    pather: &P,
    from: Point,
    to: Point,
    estimate: impl Fn(Point, Point) -> f64,
) -> Option<Path> {
    let bounds = pather.bounds();
    if !bounds.contains(from) || !bounds.contains(to) {
        trace!("search {from} -> {to}: endpoint outside {bounds}");
        return None;
    }
    if !pather.passable(from) || !pather.passable(to) {
        trace!("search {from} -> {to}: endpoint not passable");
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let mut frontier = Frontier::new(bounds);
    frontier.relax(from, None, 0.0, estimate(from, to));
    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = frontier.pop() {
        let (cp, current_g) = {
            let n = frontier.node(current);
            (n.pos, n.g)
        };

        if cp == to {
            let path = frontier.path_to(current);
            debug!(
                "search {from} -> {to}: {} steps, cost {current_g:.3}, {} expanded, {} stale",
                path.len() - 1,
                frontier.expanded,
                frontier.stale
            );
            return Some(path);
        }

        frontier.close(current);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let tentative_g = current_g + pather.cost(cp, np);
            frontier.relax(np, Some(current), tentative_g, estimate(np, to));
        }
    }

    debug!(
        "search {from} -> {to}: frontier exhausted after {} expanded",
        frontier.expanded
    );
    None
}

/// Compute the shortest path from `from` to `to` using A* over any
/// [`AstarPather`].
///
/// Returns the full path (including both endpoints) or `None` if either
/// endpoint is outside the pather's bounds or impassable, or no path exists.
pub fn astar_path<P: AstarPather>(pather: &P, from: Point, to: Point) -> Option<Path> {
    best_first(pather, from, to, |a, b| pather.estimate(a, b))
}

/// A* on a [`Grid`] with the movement pattern, heuristic and diagonal cost
/// from `config`.
///
/// The result is optimal when the heuristic is admissible for the movement
/// pattern and diagonal cost in use.
pub fn astar(grid: &Grid, start: Point, goal: Point, config: &SearchConfig) -> Option<Path> {
    astar_path(&GridPather::new(grid, config), start, goal)
}

//! Pathfinding on walkable/costed tile grids.
//!
//! This crate searches the [`Grid`](tilenav_core::Grid) type from
//! `tilenav-core`:
//!
//! - **A\*** shortest-path search ([`astar`], [`astar_path`])
//! - **Dijkstra** uniform-cost search ([`dijkstra`], [`dijkstra_path`])
//! - **Range-limited** paths that must fit a cost budget ([`astar_with_max_range`])
//! - **Reachable sets** within a cost budget ([`find_reachable_cells`], [`dijkstra_map`])
//!
//! Every query is a pure function of its inputs. Search state lives only for
//! the duration of one call, so a shared `&Grid` can be searched from many
//! threads at once.
//!
//! # Trait hierarchy
//!
//! The grid entry points wrap [`GridPather`]; the generic forms accept any
//! world that implements the pather traits.
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | bounds, passability, neighbors |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, reachable sets |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod config;
mod cost;
mod dijkstra;
mod distance;
mod frontier;
mod gridpather;
mod range;
mod traits;

pub use astar::{Path, astar, astar_path};
pub use config::{DIAGONAL_COST, SearchConfig};
pub use cost::{path_cost, step_cost};
pub use dijkstra::{dijkstra, dijkstra_map, dijkstra_path, find_reachable_cells};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan, octile};
pub use gridpather::GridPather;
pub use range::astar_with_max_range;
pub use traits::{AstarPather, Pather, WeightedPather};

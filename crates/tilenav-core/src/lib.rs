//! **tilenav-core** — grid world types for tile-based pathfinding.
//!
//! This crate provides the data model searched by `tilenav-paths`: integer
//! geometry, walkable/costed cells, the dense [`Grid`] that holds them,
//! [`Movement`] patterns for neighbor enumeration, and an ASCII map format.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod map;
pub mod movement;

pub use cell::{Cell, DEFAULT_COST};
pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
pub use map::MapError;
pub use movement::{Movement, is_diagonal_step};

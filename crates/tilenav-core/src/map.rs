//! Text maps: build a [`Grid`] from ASCII art and render it back.
//!
//! ```text
//! #####
//! #.3.#
//! #...#
//! #####
//! ```
//!
//! `.` is open floor, `#` is a wall, and a digit `1`–`9` is open terrain
//! with that cost. Lines are separated by `'\n'` and must all have the same
//! width. The input is trimmed as a whole but not per line.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::geom::Point;
use crate::grid::Grid;

/// Wall character.
pub const WALL: char = '#';
/// Open floor character (cost 1).
pub const FLOOR: char = '.';

impl Grid {
    /// Parse a grid from an ASCII map. See the [module docs](crate::map).
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                cells.push(parse_cell(ch, pos)?);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }
        Ok(Grid::from_cells(width, height, cells))
    }

    /// Render the grid as an ASCII map that [`from_ascii`](Self::from_ascii)
    /// reads back.
    ///
    /// Costs that have no single-character form (fractional or above 9) are
    /// written as `?`, which does not parse.
    pub fn to_ascii(&self) -> String {
        let w = self.width().max(0) as usize;
        let mut out = String::with_capacity(self.bounds().len() + self.height().max(0) as usize);
        for (i, cell) in self.iter().enumerate() {
            if i > 0 && i % w == 0 {
                out.push('\n');
            }
            out.push(render_cell(cell));
        }
        out
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

fn parse_cell(ch: char, pos: Point) -> Result<Cell, MapError> {
    match ch {
        FLOOR => Ok(Cell::new(pos)),
        WALL => Ok(Cell::new(pos).with_walkable(false)),
        '1'..='9' => {
            let cost = ch.to_digit(10).map_or(1.0, f64::from);
            Ok(Cell::new(pos).with_cost(cost))
        }
        _ => Err(MapError::InvalidChar { ch, pos }),
    }
}

fn render_cell(cell: &Cell) -> char {
    if !cell.walkable {
        return WALL;
    }
    if cell.cost == 1.0 {
        return FLOOR;
    }
    if cell.cost.fract() == 0.0 && (2.0..=9.0).contains(&cell.cost) {
        return char::from_digit(cell.cost as u32, 10).unwrap_or('?');
    }
    '?'
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map has no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character outside the map alphabet was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map: invalid character '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

//! The [`Grid`] type: a dense 2D array of walkable/costed [`Cell`]s.
//!
//! Storage is a flat row-major `Vec` addressed by `y * width + x`. A `Grid`
//! owns its cells outright, so a shared `&Grid` can be searched from several
//! threads at once while mutation requires `&mut Grid`.

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::movement::Movement;

/// A fixed-size grid of [`Cell`]s anchored at `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Range,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let aligned = raw.cells.len() == raw.bounds.len()
            && raw.cells.iter().zip(raw.bounds.iter()).all(|(c, p)| c.pos == p);
        if raw.bounds.min != Point::ZERO || !aligned {
            return Err(format!(
                "grid: {} cells do not match bounds {}",
                raw.cells.len(),
                raw.bounds
            ));
        }
        Ok(Self {
            bounds: raw.bounds,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create a `width` × `height` grid where every cell has the default cost
    /// and the given walkability. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32, walkable: bool) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p).with_walkable(walkable))
            .collect();
        Self { bounds, cells }
    }

    /// Build a grid from a column-major boolean matrix indexed `[x][y]`.
    ///
    /// A cell is walkable iff its entry is `true`; every cost is the default.
    /// The height is the longest column; missing entries of shorter columns
    /// become unwalkable.
    pub fn from_walkable_matrix<C: AsRef<[bool]>>(matrix: &[C]) -> Self {
        Self::from_columns(matrix, |p, walkable| Cell::new(p).with_walkable(walkable))
    }

    /// Build a grid from a column-major cost matrix indexed `[x][y]`.
    ///
    /// A cell is walkable iff its cost is `> 0`; other cells are unwalkable
    /// with the default cost. Ragged columns are handled as in
    /// [`from_walkable_matrix`](Self::from_walkable_matrix).
    pub fn from_cost_matrix<C: AsRef<[f64]>>(matrix: &[C]) -> Self {
        Self::from_columns(matrix, Cell::from_cost)
    }

    fn from_columns<T: Copy, C: AsRef<[T]>>(matrix: &[C], make: impl Fn(Point, T) -> Cell) -> Self {
        let width = matrix.len() as i32;
        let height = matrix.iter().map(|c| c.as_ref().len()).max().unwrap_or(0) as i32;
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds
            .iter()
            .map(|p| match matrix[p.x as usize].as_ref().get(p.y as usize) {
                Some(&v) => make(p, v),
                None => Cell::new(p).with_walkable(false),
            })
            .collect();
        Self { bounds, cells }
    }

    /// Assemble a grid from row-major cells. Used by the map parser.
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), (width.max(0) * height.max(0)) as usize);
        Self {
            bounds: Range::new(0, 0, width.max(0), height.max(0)),
            cells,
        }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.contains(Point::new(x, y))
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.at(Point::new(x, y))
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.walkable)
    }

    /// Replace the walkability of the cell at `(x, y)`, keeping its cost.
    /// No-op outside the grid.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) {
        if let Some(i) = self.bounds.index_of(Point::new(x, y)) {
            self.cells[i] = self.cells[i].with_walkable(walkable);
        }
    }

    /// Replace the terrain cost of the cell at `(x, y)`, keeping its
    /// walkability. No-op outside the grid.
    ///
    /// The value is stored as given; searches assume it is positive.
    pub fn set_cost(&mut self, x: i32, y: i32, cost: f64) {
        if let Some(i) = self.bounds.index_of(Point::new(x, y)) {
            self.cells[i] = self.cells[i].with_cost(cost);
        }
    }

    /// Walkable in-bounds neighbors of `(x, y)` under `movement`, in the
    /// pattern's offset order.
    pub fn neighbors(&self, x: i32, y: i32, movement: &Movement) -> Vec<Cell> {
        let p = Point::new(x, y);
        movement
            .offsets()
            .iter()
            .filter_map(|&d| p.checked_add(d).and_then(|n| self.at(n)))
            .filter(|c| c.walkable)
            .collect()
    }

    /// Like [`neighbors`](Self::neighbors) but writes positions into `buf`,
    /// which is cleared first.
    pub fn neighbors_into(&self, p: Point, movement: &Movement, buf: &mut Vec<Point>) {
        buf.clear();
        for &d in movement.offsets() {
            let Some(n) = p.checked_add(d) else {
                continue;
            };
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|c| c.walkable).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2, true);
        g.set_walkable(1, 0, false);
        g.set_cost(2, 1, 4.5);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_mismatched_cells() {
        let json = r#"{"bounds":{"min":{"x":0,"y":0},"max":{"x":2,"y":2}},"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}

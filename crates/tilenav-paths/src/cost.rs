//! Step and path cost on a [`Grid`].

use tilenav_core::{Grid, Point, is_diagonal_step};

/// Cost of the single step `from → to`.
///
/// The base cost is `diagonal_cost` for a diagonal step (one whose offset
/// has L1 length above 1) and `1.0` otherwise, multiplied by the terrain
/// cost of the destination cell. Stepping outside the grid costs infinity.
#[inline]
pub fn step_cost(grid: &Grid, from: Point, to: Point, diagonal_cost: f64) -> f64 {
    let Some(cell) = grid.at(to) else {
        return f64::INFINITY;
    };
    // A step too long to represent is certainly not orthogonal.
    let diagonal = to.checked_sub(from).is_none_or(is_diagonal_step);
    let base = if diagonal {
        diagonal_cost
    } else {
        1.0
    };
    base * cell.cost
}

/// Total cost of walking `path` step by step. Paths with fewer than two
/// points cost nothing.
pub fn path_cost(grid: &Grid, path: &[Point], diagonal_cost: f64) -> f64 {
    path.windows(2)
        .map(|w| step_cost(grid, w[0], w[1], diagonal_cost))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DIAGONAL_COST;

    #[test]
    fn orthogonal_and_diagonal_steps() {
        let mut g = Grid::new(3, 3, true);
        g.set_cost(1, 1, 3.0);
        assert_eq!(step_cost(&g, Point::new(0, 1), Point::new(1, 1), DIAGONAL_COST), 3.0);
        assert_eq!(step_cost(&g, Point::new(0, 0), Point::new(1, 1), 2.0), 6.0);
        // Only the destination's terrain counts.
        assert_eq!(step_cost(&g, Point::new(1, 1), Point::new(2, 1), DIAGONAL_COST), 1.0);
    }

    #[test]
    fn stepping_off_grid_is_infinite() {
        let g = Grid::new(2, 2, true);
        assert!(step_cost(&g, Point::new(1, 1), Point::new(2, 1), DIAGONAL_COST).is_infinite());
    }

    #[test]
    fn step_from_far_away_is_diagonal() {
        let g = Grid::new(2, 2, true);
        let to = Point::new(1, 0);
        assert_eq!(step_cost(&g, Point::new(i32::MIN, 0), to, 3.0), 3.0);
        assert_eq!(step_cost(&g, Point::new(i32::MAX, i32::MIN), to, 3.0), 3.0);
        let path = [Point::new(i32::MIN, i32::MIN), Point::new(0, 0)];
        assert_eq!(path_cost(&g, &path, 2.0), 2.0);
    }

    #[test]
    fn path_cost_sums_steps() {
        let g = Grid::new(4, 4, true);
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 1), Point::new(3, 2)];
        let c = path_cost(&g, &path, DIAGONAL_COST);
        assert!((c - (1.0 + 2.0 * DIAGONAL_COST)).abs() < 1e-9);
        assert_eq!(path_cost(&g, &path[..1], DIAGONAL_COST), 0.0);
        assert_eq!(path_cost(&g, &[], DIAGONAL_COST), 0.0);
    }
}

//! Distance estimators used as A* heuristics.

use std::f64::consts::SQRT_2;

use tilenav_core::Point;

// Absolute per-axis distance, taken in f64 so that any pair of points works.
#[inline]
fn axis_deltas(a: Point, b: Point) -> (f64, f64) {
    (
        (f64::from(a.x) - f64::from(b.x)).abs(),
        (f64::from(a.y) - f64::from(b.y)).abs(),
    )
}

/// Manhattan (L1) distance. Exact on open ground under four-way movement.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = axis_deltas(a, b);
    dx + dy
}

/// Euclidean (L2) distance. Never overestimates for any movement pattern
/// whose steps cost at least their geometric length.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = axis_deltas(a, b);
    dx.hypot(dy)
}

/// Chebyshev (L∞) distance. Exact under eight-way movement when diagonal
/// steps cost the same as orthogonal ones.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = axis_deltas(a, b);
    dx.max(dy)
}

/// Octile distance. Exact under eight-way movement with diagonal cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = axis_deltas(a, b);
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    lo * SQRT_2 + (hi - lo)
}

/// Selectable heuristic for the grid search entry points.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Always zero: turns A* into Dijkstra.
    Zero,
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
    /// Caller-supplied estimator. It should be admissible for the
    /// movement pattern and step costs in use.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(Point, Point) -> f64),
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Manhattan => manhattan(from, to),
            Self::Euclidean => euclidean(from, to),
            Self::Chebyshev => chebyshev(from, to),
            Self::Octile => octile(from, to),
            Self::Custom(f) => f(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn known_values() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert!(close(octile(a, b), 3.0 * SQRT_2 + 1.0));
    }

    #[test]
    fn symmetric_and_zero_on_identity() {
        let pts = [Point::new(0, 0), Point::new(-3, 5), Point::new(7, -2)];
        for &a in &pts {
            for &b in &pts {
                for h in [manhattan, euclidean, chebyshev, octile] {
                    assert_eq!(h(a, b), h(b, a));
                    assert!(h(a, b) >= 0.0);
                }
            }
            assert_eq!(manhattan(a, a), 0.0);
            assert_eq!(octile(a, a), 0.0);
        }
    }

    #[test]
    fn extreme_coordinates() {
        let (a, b) = (Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, 0));
        let span = f64::from(i32::MAX) - f64::from(i32::MIN);
        assert_eq!(chebyshev(a, b), span);
        assert_eq!(manhattan(a, b), span - f64::from(i32::MIN));
        assert!(octile(a, b) > chebyshev(a, b));
        assert!(euclidean(a, b).is_finite());
    }

    #[test]
    fn ordering_between_estimators() {
        // chebyshev <= octile <= manhattan, euclidean <= octile
        let a = Point::new(0, 0);
        for b in [Point::new(3, 1), Point::new(-4, 4), Point::new(0, 9)] {
            assert!(chebyshev(a, b) <= octile(a, b) + 1e-9);
            assert!(euclidean(a, b) <= octile(a, b) + 1e-9);
            assert!(octile(a, b) <= manhattan(a, b) + 1e-9);
        }
    }

    #[test]
    fn heuristic_dispatch() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
        assert_eq!(Heuristic::default().estimate(a, b), 5.0);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 3.0);
        assert_eq!(Heuristic::Custom(|_, _| 1.5).estimate(a, b), 1.5);
    }
}

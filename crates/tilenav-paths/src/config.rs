//! Search settings shared by the grid entry points.

use tilenav_core::Movement;

use crate::distance::Heuristic;

/// Default cost of a diagonal step (√2).
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Movement pattern, heuristic and diagonal step cost for a grid search.
///
/// The diagonal cost is independent of the heuristic. Pairing an estimator
/// with a diagonal cost it overestimates (for example [`Heuristic::Octile`]
/// with a diagonal cost of `1.0`) still terminates but may return a
/// sub-optimal path.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub movement: Movement,
    pub heuristic: Heuristic,
    pub diagonal_cost: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movement: Movement::FourWay,
            heuristic: Heuristic::Manhattan,
            diagonal_cost: DIAGONAL_COST,
        }
    }
}

impl SearchConfig {
    /// Four-way movement with the Manhattan heuristic (the default).
    pub fn four_way() -> Self {
        Self::default()
    }

    /// Eight-way movement with the octile heuristic and √2 diagonals.
    pub fn eight_way() -> Self {
        Self {
            movement: Movement::EightWay,
            heuristic: Heuristic::Octile,
            diagonal_cost: DIAGONAL_COST,
        }
    }

    /// Set the movement pattern (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the diagonal step cost (builder).
    pub fn with_diagonal_cost(mut self, diagonal_cost: f64) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.movement, Movement::FourWay);
        assert!(matches!(c.heuristic, Heuristic::Manhattan));
        assert_eq!(c.diagonal_cost, DIAGONAL_COST);
    }

    #[test]
    fn builders() {
        let c = SearchConfig::four_way()
            .with_movement(Movement::EightWay)
            .with_heuristic(Heuristic::Chebyshev)
            .with_diagonal_cost(1.0);
        assert_eq!(c.movement, Movement::EightWay);
        assert!(matches!(c.heuristic, Heuristic::Chebyshev));
        assert_eq!(c.diagonal_cost, 1.0);

        let e = SearchConfig::eight_way();
        assert!(matches!(e.heuristic, Heuristic::Octile));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::eight_way().with_diagonal_cost(1.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.movement, Movement::EightWay);
        assert!(matches!(back.heuristic, Heuristic::Octile));
        assert_eq!(back.diagonal_cost, 1.5);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let back: SearchConfig = serde_json::from_str(r#"{"movement":"EightWay"}"#).unwrap();
        assert_eq!(back.movement, Movement::EightWay);
        assert!(matches!(back.heuristic, Heuristic::Manhattan));
        assert_eq!(back.diagonal_cost, DIAGONAL_COST);
    }
}

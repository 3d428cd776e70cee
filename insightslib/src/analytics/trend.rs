//! Trend direction and magnitude of a numeric series.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Changes smaller than this many percent read as stable.
pub const STABLE_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Direction of an already computed change (metric card deltas).
    pub fn of_change(change: f64) -> Self {
        if change > 0.0 {
            TrendDirection::Up
        } else if change < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Stable => "→",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        })
    }
}

/// Direction plus non-negative percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub percentage: f64,
}

impl TrendResult {
    pub const STABLE: TrendResult = TrendResult {
        direction: TrendDirection::Stable,
        percentage: 0.0,
    };
}

/// Compare the last two points of `series`.
///
/// Fewer than two points, or a change under 1%, is stable. Growth from a
/// zero baseline is reported as up 100%.
///
/// ```rust
/// use insightslib::analytics::{calculate_trend, TrendDirection};
///
/// let trend = calculate_trend(&[100.0, 150.0]);
/// assert_eq!(trend.direction, TrendDirection::Up);
/// assert_eq!(trend.percentage, 50.0);
/// ```
pub fn calculate_trend(series: &[f64]) -> TrendResult {
    let [.., previous, recent] = series else {
        return TrendResult::STABLE;
    };

    if *previous == 0.0 {
        if *recent == 0.0 {
            return TrendResult::STABLE;
        }
        return TrendResult {
            direction: TrendDirection::Up,
            percentage: 100.0,
        };
    }

    let change = (recent - previous) / previous * 100.0;
    if change.abs() < STABLE_THRESHOLD || change.is_nan() {
        return TrendResult::STABLE;
    }

    TrendResult {
        direction: TrendDirection::of_change(change),
        percentage: change.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_stable() {
        assert_eq!(calculate_trend(&[]), TrendResult::STABLE);
        assert_eq!(calculate_trend(&[42.0]), TrendResult::STABLE);
    }

    #[test]
    fn test_up_and_down() {
        assert_eq!(
            calculate_trend(&[100.0, 150.0]),
            TrendResult {
                direction: TrendDirection::Up,
                percentage: 50.0
            }
        );
        assert_eq!(
            calculate_trend(&[1.0, 2.0, 200.0, 150.0]),
            TrendResult {
                direction: TrendDirection::Down,
                percentage: 25.0
            }
        );
    }

    #[test]
    fn test_small_change_is_stable() {
        assert_eq!(calculate_trend(&[100.0, 100.5]), TrendResult::STABLE);
        assert_eq!(calculate_trend(&[100.0, 99.2]), TrendResult::STABLE);
    }

    #[test]
    fn test_exactly_one_percent_counts() {
        let trend = calculate_trend(&[100.0, 101.0]);
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(
            calculate_trend(&[0.0, 5.0]),
            TrendResult {
                direction: TrendDirection::Up,
                percentage: 100.0
            }
        );
        assert_eq!(calculate_trend(&[0.0, 0.0]), TrendResult::STABLE);
    }

    #[test]
    fn test_of_change() {
        assert_eq!(TrendDirection::of_change(12.5), TrendDirection::Up);
        assert_eq!(TrendDirection::of_change(-2.3), TrendDirection::Down);
        assert_eq!(TrendDirection::of_change(0.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::Down.to_string(), "down");
    }
}

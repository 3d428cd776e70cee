//! Derived figures for charts and metric cards.
//!
//! - **Trend**: direction and size of the latest change in a series
//! - **Aggregate**: group-and-sum over any [`Record`](crate::Record) slice
//! - **Palette**: chart colors

pub mod aggregate;
pub mod palette;
pub mod trend;

pub use aggregate::{aggregate, GroupTotals};
pub use palette::{generate_colors, generate_colors_with, PALETTE};
pub use trend::{calculate_trend, TrendDirection, TrendResult, STABLE_THRESHOLD};

//! Dashboard data: record types and where they come from.
//!
//! - **Campaigns**: rows of the campaigns table (`Campaign`, `CampaignField`)
//! - **Metrics**: KPI cards and chart series (`MetricCard`, `RevenuePoint`, ...)
//! - **Sources**: the `DataSource` trait with a seeded mock and a JSON file reader
//!
//! ## Example
//!
//! ```rust
//! use insightslib::data::{DataSource, MockSource};
//!
//! let snapshot = MockSource::new(1).snapshot().unwrap();
//! assert_eq!(snapshot.campaigns.len(), 25);
//! ```

pub mod campaign;
pub mod metrics;
pub mod source;

pub use campaign::{Campaign, CampaignField, CampaignStatus};
pub use metrics::{
    series, DashboardSnapshot, DeviceShare, MetricCard, MetricFormat, RevenueField, RevenuePoint,
    TrafficSource,
};
pub use source::{DataSource, JsonFileSource, MockSource, REVENUE_DAYS};

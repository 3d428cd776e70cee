//! # insightslib
//!
//! Data shaping for a campaign analytics dashboard: display formatters, a
//! search → filter → sort → paginate table pipeline, and the small analytics
//! helpers behind metric cards and charts.
//!
//! ## Overview
//!
//! Every operation is a pure function over in-memory records. Nothing here
//! renders anything; views take the strings and pages this crate produces.
//!
//! - **Format**: compact numbers (`1.2K`), percentages, locale-aware currency,
//!   dates (short, long, relative, iso)
//! - **Query**: the table pipeline over any [`Record`] type, with typed field
//!   keys and stable sorting
//! - **Analytics**: trend of a series, group-and-sum aggregation, chart colors
//! - **Data**: campaign and metric records, a seeded mock source and a JSON
//!   snapshot source
//! - **Output**: table-ready strings for a page of records
//!
//! ## Example
//!
//! ```rust
//! use insightslib::data::{CampaignField, DataSource, MockSource};
//! use insightslib::format::format_number;
//! use insightslib::query::{SortDirection, TableQuery};
//!
//! let campaigns = MockSource::new(42).campaigns().unwrap();
//!
//! let page = TableQuery::new()
//!     .sort(CampaignField::Clicks, SortDirection::Descending)
//!     .items_per_page(5)
//!     .run(&campaigns);
//! assert_eq!(page.items.len(), 5);
//! assert_eq!(page.meta.total_pages, 5);
//! assert!(page.items[0].clicks >= page.items[1].clicks);
//!
//! assert_eq!(format_number(1500.0), "1.5K");
//! ```

pub mod analytics;
pub mod data;
pub mod error;
pub mod format;
pub mod output;
pub mod query;
pub mod record;
pub mod settings;
pub mod validate;

#[cfg(test)]
mod testing;

pub use analytics::{
    aggregate, calculate_trend, generate_colors, GroupTotals, TrendDirection, TrendResult,
};
pub use data::{
    Campaign, CampaignField, CampaignStatus, DashboardSnapshot, DataSource, JsonFileSource,
    MockSource,
};
pub use error::InsightsError;
pub use format::{format_currency, format_date, format_number, format_percentage, DateFormat};
pub use output::{DataTable, TableRow};
pub use query::{Filter, Page, PaginationMeta, SortConfig, SortDirection, TableQuery, TableState};
pub use record::{Field, Record, Value};
pub use settings::Settings;

/// Result type for insightslib operations
pub type Result<T> = std::result::Result<T, InsightsError>;

//! Query processing: search, filter, sort and paginate records.
//!
//! This module turns a slice of records into one page of a table. It
//! provides:
//!
//! - **Options**: Sort and filter configuration (`SortConfig`, `Filter`)
//! - **Stages**: `search`, `filter`, `sort`, `paginate`, each a pure function
//!   returning a new `Vec`
//! - **TableQuery**: The fixed stage composition used by table views
//! - **TableState**: Consumer-side state with page-reset rules
//!
//! ## Example
//!
//! ```rust
//! use insightslib::data::{CampaignField, MockSource, DataSource};
//! use insightslib::query::{SortDirection, TableQuery};
//!
//! let campaigns = MockSource::new(7).campaigns().unwrap();
//! let page = TableQuery::new()
//!     .search("sale", vec![CampaignField::Name])
//!     .sort(CampaignField::Clicks, SortDirection::Descending)
//!     .items_per_page(5)
//!     .run(&campaigns);
//! assert!(page.items.len() <= 5);
//! ```

pub mod filter;
pub mod options;
pub mod paginate;
pub mod pipeline;
pub mod search;
pub mod sort;
pub mod state;

pub use filter::filter;
pub use options::{Filter, FilterOp, FilterValue, SortConfig, SortDirection};
pub use paginate::{paginate, Page, PaginationMeta};
pub use pipeline::{TableQuery, DEFAULT_ITEMS_PER_PAGE};
pub use search::search;
pub use sort::{compare_text, compare_values, sort};
pub use state::TableState;

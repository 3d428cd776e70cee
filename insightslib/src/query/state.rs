//! Consumer-side table state.
//!
//! The pipeline itself is stateless. A table view keeps the current query,
//! sort and page between renders, and must go back to page 1 whenever the
//! query or the sort changes; otherwise a narrowed result set can leave the
//! view on a page that no longer exists.

use serde::{Deserialize, Serialize};

use crate::record::Field;

use super::options::{SortConfig, SortDirection};
use super::pipeline::{TableQuery, DEFAULT_ITEMS_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState<F> {
    query: String,
    sort: SortConfig<F>,
    page: usize,
    items_per_page: usize,
}

impl<F: Field> TableState<F> {
    /// Unsorted first page, keyed on `default_sort_key` for the first toggle.
    pub fn new(default_sort_key: F) -> Self {
        Self {
            query: String::new(),
            sort: SortConfig::new(default_sort_key),
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortConfig<F> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Replace the search text and return to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Header click: the active column cycles asc, desc, unsorted; another
    /// column starts ascending. Always returns to page 1.
    pub fn toggle_sort(&mut self, column: F) {
        self.sort = if self.sort.key == column {
            SortConfig {
                key: column,
                direction: self.sort.direction.cycle(),
            }
        } else {
            SortConfig {
                key: column,
                direction: SortDirection::Ascending,
            }
        };
        self.page = 1;
    }

    /// Jump to a page; page numbers start at 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Query for the current render.
    pub fn to_query(&self, search_fields: &[F]) -> TableQuery<F> {
        TableQuery::new()
            .search(self.query.clone(), search_fields.to_vec())
            .sort(self.sort.key, self.sort.direction)
            .page(self.page)
            .items_per_page(self.items_per_page)
    }
}

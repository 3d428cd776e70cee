//! Table pipeline: search, filter, sort, then paginate.
//!
//! The stages always run in that order, so pagination sees the fully
//! searched, filtered and sorted collection:
//!
//! 1. Raw records (any [`Record`] slice)
//! 2. Search (free text across `search_fields`)
//! 3. Filters (every structured criterion must hold)
//! 4. Sort (one column, stable)
//! 5. Page (1-indexed slice plus [`PaginationMeta`](super::PaginationMeta))
//!
//! A consumer that changes the query or the sort column must ask for page 1
//! again; [`TableState`](super::TableState) does that bookkeeping.

use serde::{Deserialize, Serialize};

use crate::record::{Field, Record};

use super::filter::filter;
use super::options::{Filter, SortConfig, SortDirection};
use super::paginate::{paginate, Page};
use super::search::search;
use super::sort::sort;

/// Default page size of the campaign table.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Everything needed to render one page of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery<F> {
    /// Free-text query; blank means no search
    pub query: String,
    /// Columns searched by `query`
    pub search_fields: Vec<F>,
    /// Structured filters, all of which must hold
    pub filters: Vec<Filter<F>>,
    /// Ordering; `None` direction keeps source order
    pub sort: Option<SortConfig<F>>,
    /// Requested page (starts at 1)
    pub page: usize,
    /// Page size
    pub items_per_page: usize,
}

impl<F: Field> Default for TableQuery<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            search_fields: Vec::new(),
            filters: Vec::new(),
            sort: None,
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl<F: Field> TableQuery<F> {
    /// First page, no search, no filters, source order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: free-text search over `fields`
    pub fn search(mut self, query: impl Into<String>, fields: impl Into<Vec<F>>) -> Self {
        self.query = query.into();
        self.search_fields = fields.into();
        self
    }

    /// Builder: add a filter
    pub fn filter(mut self, filter: Filter<F>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Builder: order by one column
    pub fn sort(mut self, key: F, direction: SortDirection) -> Self {
        self.sort = Some(SortConfig { key, direction });
        self
    }

    /// Builder: page number (starts at 1)
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Builder: page size
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Run the pipeline over borrowed records.
    pub fn run<'a, R>(&self, records: &'a [R]) -> Page<&'a R>
    where
        R: Record<Field = F>,
    {
        let rows: Vec<&R> = records.iter().collect();
        self.apply(&rows)
    }

    /// Run the pipeline over any cloneable record handle.
    pub fn apply<T>(&self, records: &[T]) -> Page<T>
    where
        T: Record<Field = F> + Clone,
    {
        let _span = tracing::debug_span!("table_query", page = self.page).entered();

        let searched = search(records, &self.query, &self.search_fields);
        let filtered = filter(&searched, &self.filters);
        let sorted = match self.sort {
            Some(config) => sort(&filtered, config.key, config.direction),
            None => filtered,
        };
        let page = paginate(&sorted, self.page, self.items_per_page);

        tracing::debug!(
            total = page.meta.total_items,
            shown = page.items.len(),
            total_pages = page.meta.total_pages,
            "table page built"
        );
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{row, sample_rows, Row, RowField};

    fn campaigns() -> Vec<Row> {
        vec![
            row("Summer Sale 2024", 1200.0),
            row("Holiday Special", 300.0),
            row("Black Friday Sale", 4500.0),
            row("Spring Collection", 800.0),
            row("Cyber Monday Deals", 2600.0),
        ]
    }

    #[test]
    fn test_scenario_sort_then_first_page() {
        let rows = sample_rows();
        let page = TableQuery::new()
            .sort(RowField::Name, SortDirection::Ascending)
            .items_per_page(2)
            .run(&rows);

        let got: Vec<(&str, f64)> = page
            .items
            .iter()
            .map(|r| (r.name.as_str(), r.clicks))
            .collect();
        assert_eq!(got, vec![("A", 10.0), ("A", 3.0)]);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.meta.total_items, 3);
        assert!(page.meta.has_next_page);
        assert!(!page.meta.has_previous_page);
    }

    #[test]
    fn test_default_query_is_identity_first_page() {
        let rows = campaigns();
        let page = TableQuery::<RowField>::new().run(&rows);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name, "Summer Sale 2024");
    }

    #[test]
    fn test_pagination_sees_filtered_sorted_set() {
        let rows = campaigns();
        let page = TableQuery::new()
            .search("sale", vec![RowField::Name])
            .sort(RowField::Clicks, SortDirection::Descending)
            .items_per_page(1)
            .run(&rows);

        assert_eq!(page.meta.total_items, 2);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.items[0].name, "Black Friday Sale");

        let second = TableQuery::new()
            .search("sale", vec![RowField::Name])
            .sort(RowField::Clicks, SortDirection::Descending)
            .items_per_page(1)
            .page(2)
            .run(&rows);
        assert_eq!(second.items[0].name, "Summer Sale 2024");
        assert!(!second.meta.has_next_page);
    }

    #[test]
    fn test_filters_apply_before_sort() {
        let rows = campaigns();
        let page = TableQuery::new()
            .filter(Filter::greater(RowField::Clicks, 1000.0))
            .sort(RowField::Name, SortDirection::Ascending)
            .run(&rows);
        let names: Vec<&str> = page.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Black Friday Sale", "Cyber Monday Deals", "Summer Sale 2024"]
        );
    }

    #[test]
    fn test_apply_over_owned_rows() {
        let page = TableQuery::new()
            .sort(RowField::Clicks, SortDirection::Ascending)
            .items_per_page(2)
            .page(2)
            .apply(&campaigns());
        assert_eq!(
            page.items,
            vec![
                row("Summer Sale 2024", 1200.0),
                row("Cyber Monday Deals", 2600.0)
            ]
        );
    }

    #[test]
    fn test_no_match_gives_empty_page() {
        let rows = campaigns();
        let page = TableQuery::new()
            .search("zzz", vec![RowField::Name])
            .run(&rows);
        assert!(page.is_empty());
        assert_eq!(page.meta.total_pages, 0);
    }
}

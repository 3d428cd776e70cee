//! Page slicing and pagination metadata.

use serde::{Deserialize, Serialize};

/// Pagination metadata, derived from `(total_items, items_per_page,
/// current_page)` each time a page is cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Requested page number (starts at 1)
    pub current_page: usize,
    /// Number of pages; 0 when there are no items
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
    /// Page size
    pub items_per_page: usize,
    /// Whether items exist past this page's end offset (page 0 ends at
    /// offset 0, so it reports a next page whenever there are items)
    pub has_next_page: bool,
    /// Whether this is not the first page
    pub has_previous_page: bool,
}

impl PaginationMeta {
    /// Compute metadata for a page of a collection.
    ///
    /// `items_per_page` of 0 is treated as 1.
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let (_, end) = page_bounds(current_page, items_per_page);

        Self {
            current_page,
            total_pages: total_items.div_ceil(items_per_page),
            total_items,
            items_per_page,
            has_next_page: end < total_items,
            has_previous_page: current_page > 1,
        }
    }

    /// "Page X of Y" with Y never below 1, so an empty table reads
    /// "Page 1 of 1" rather than "Page 1 of 0".
    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page,
            self.total_pages.max(1)
        )
    }

    /// 1-based positions of the first and last item on this page, if any.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let (start, end) = page_bounds(self.current_page, self.items_per_page);
        if self.current_page == 0 || start >= self.total_items {
            return None;
        }
        Some((start + 1, end.min(self.total_items)))
    }
}

/// One page of records with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Pagination metadata
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Cut page `page` (1-indexed) out of `records`.
///
/// A page past the end, or page 0, yields no items rather than an error.
pub fn paginate<T: Clone>(records: &[T], page: usize, items_per_page: usize) -> Page<T> {
    let meta = PaginationMeta::new(page, items_per_page, records.len());
    let items = if page == 0 {
        Vec::new()
    } else {
        let (start, end) = page_bounds(page, meta.items_per_page);
        records
            .get(start.min(records.len())..end.min(records.len()))
            .map(<[T]>::to_vec)
            .unwrap_or_default()
    };
    Page { items, meta }
}

/// `[start, end)` offsets of a 1-indexed page; page 0 maps to an empty
/// range at the origin.
fn page_bounds(page: usize, items_per_page: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    let end = if page == 0 {
        0
    } else {
        start.saturating_add(items_per_page)
    };
    (start, end)
}

//! Input options for table queries.
//!
//! This module contains the configuration types that control how the
//! pipeline orders and filters rows.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InsightsError;

/// Sort direction.
///
/// `None` leaves rows in their incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
    /// No ordering applied
    #[default]
    None,
}

impl SortDirection {
    /// Next state when the same column header is activated again:
    /// ascending, then descending, then unsorted.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    /// Header glyph for a sorted column.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
            SortDirection::None => "",
        }
    }
}

impl FromStr for SortDirection {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "none" | "" => Ok(SortDirection::None),
            _ => Err(InsightsError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Ordering configuration: one column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<F> {
    /// Column to order by
    pub key: F,
    /// Sort direction
    pub direction: SortDirection,
}

impl<F> SortConfig<F> {
    /// Unsorted view keyed on `key` (the column a header toggle starts from).
    pub fn new(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::None,
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = SortDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::None
    }
}

/// Comparison applied by a [`Filter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operator", content = "value", rename_all = "lowercase")]
pub enum FilterOp {
    /// Text equals text, or number equals number
    Equals(FilterValue),
    /// Case-insensitive substring of the string form
    Contains(String),
    /// Numerically greater than
    Greater(f64),
    /// Numerically less than
    Less(f64),
    /// String form is one of the labels
    In(Vec<String>),
    /// Inclusive numeric range
    Between(f64, f64),
}

/// Operand for an equality filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

/// A single filter criterion on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter<F> {
    pub key: F,
    #[serde(flatten)]
    pub op: FilterOp,
}

impl<F> Filter<F> {
    pub fn equals(key: F, value: impl Into<FilterValue>) -> Self {
        Self {
            key,
            op: FilterOp::Equals(value.into()),
        }
    }

    pub fn contains(key: F, needle: impl Into<String>) -> Self {
        Self {
            key,
            op: FilterOp::Contains(needle.into()),
        }
    }

    pub fn greater(key: F, bound: f64) -> Self {
        Self {
            key,
            op: FilterOp::Greater(bound),
        }
    }

    pub fn less(key: F, bound: f64) -> Self {
        Self {
            key,
            op: FilterOp::Less(bound),
        }
    }

    pub fn one_of<I, S>(key: F, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            op: FilterOp::In(labels.into_iter().map(Into::into).collect()),
        }
    }

    pub fn between(key: F, low: f64, high: f64) -> Self {
        Self {
            key,
            op: FilterOp::Between(low, high),
        }
    }
}

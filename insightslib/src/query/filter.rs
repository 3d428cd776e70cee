//! Column filters: structured criteria on top of free-text search.

use crate::record::{Record, Value};

use super::options::{Filter, FilterOp, FilterValue};

/// Keep the records that satisfy every filter.
///
/// An empty filter list keeps everything. Values that cannot be compared
/// with an operator (text against a numeric bound, a missing column) simply
/// fail to match.
pub fn filter<T: Record + Clone>(records: &[T], filters: &[Filter<T::Field>]) -> Vec<T> {
    if filters.is_empty() {
        return records.to_vec();
    }

    let kept: Vec<T> = records
        .iter()
        .filter(|record| filters.iter().all(|f| matches(&record.value(f.key), &f.op)))
        .cloned()
        .collect();

    tracing::debug!(
        filters = filters.len(),
        input = records.len(),
        kept = kept.len(),
        "filters applied"
    );
    kept
}

/// Test a single value against an operator.
pub fn matches(value: &Value<'_>, op: &FilterOp) -> bool {
    match op {
        FilterOp::Equals(expected) => match (value, expected) {
            (Value::Text(s), FilterValue::Text(t)) => *s == t.as_str(),
            (Value::Number(n), FilterValue::Number(m)) => n == m,
            _ => false,
        },
        FilterOp::Contains(needle) => value
            .to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        FilterOp::Greater(bound) => value.coerce_number().is_some_and(|n| n > *bound),
        FilterOp::Less(bound) => value.coerce_number().is_some_and(|n| n < *bound),
        FilterOp::In(labels) => {
            !value.is_missing() && {
                let label = value.to_string();
                labels.iter().any(|l| *l == label)
            }
        }
        FilterOp::Between(low, high) => value
            .coerce_number()
            .is_some_and(|n| n >= *low && n <= *high),
    }
}

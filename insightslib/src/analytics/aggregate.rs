//! Group-and-sum aggregation over records.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::Record;

/// Per-group sums, in the order each group was first seen. Serializes as a
/// JSON object keyed by group label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupTotals {
    groups: IndexMap<String, f64>,
}

impl GroupTotals {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.groups.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.groups.iter().map(|(l, s)| (l.as_str(), *s))
    }

    /// Sum across every group.
    pub fn total(&self) -> f64 {
        self.groups.values().sum()
    }

    /// Each group's share of the total as a whole-number percentage.
    /// All shares are 0 when the total is 0.
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.iter()
            .map(|(label, sum)| {
                let share = if total == 0.0 {
                    0.0
                } else {
                    (sum / total * 100.0).round()
                };
                (label, share)
            })
            .collect()
    }

    fn add(&mut self, label: String, amount: f64) {
        *self.groups.entry(label).or_insert(0.0) += amount;
    }
}

/// Sum `sum_field` per distinct string form of `group_key`.
///
/// Values that are missing or not numeric (numeric text is accepted)
/// contribute 0 to their group.
pub fn aggregate<T: Record>(
    records: &[T],
    group_key: T::Field,
    sum_field: T::Field,
) -> GroupTotals {
    let mut totals = GroupTotals::default();
    for record in records {
        let label = record.value(group_key).to_string();
        let amount = record
            .value(sum_field)
            .coerce_number()
            .filter(|n| !n.is_nan())
            .unwrap_or(0.0);
        totals.add(label, amount);
    }
    tracing::debug!(records = records.len(), groups = totals.len(), "aggregated");
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{row as src, RowField};

    #[test]
    fn test_group_and_sum() {
        let rows = vec![src("a", 3.0), src("a", 2.0), src("b", 5.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Clicks);
        assert_eq!(totals.get("a"), Some(5.0));
        assert_eq!(totals.get("b"), Some(5.0));
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.total(), 10.0);
    }

    #[test]
    fn test_first_seen_order() {
        let rows = vec![src("z", 1.0), src("a", 1.0), src("z", 1.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Clicks);
        let labels: Vec<&str> = totals.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["z", "a"]);
        assert_eq!(totals.get("z"), Some(2.0));
    }

    #[test]
    fn test_non_numeric_counts_as_zero() {
        let mut with_note = src("a", 1.0);
        with_note.note = Some("n/a".to_string());
        let mut numeric_note = src("a", 1.0);
        numeric_note.note = Some("4".to_string());
        let rows = vec![with_note, numeric_note, src("b", 1.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Note);
        assert_eq!(totals.get("a"), Some(4.0));
        assert_eq!(totals.get("b"), Some(0.0));
    }

    #[test]
    fn test_numeric_group_key() {
        let rows = vec![src("x", 2.0), src("y", 2.0), src("z", 3.5)];
        let totals = aggregate(&rows, RowField::Clicks, RowField::Clicks);
        assert_eq!(totals.get("2"), Some(4.0));
        assert_eq!(totals.get("3.5"), Some(3.5));
    }

    #[test]
    fn test_shares() {
        let rows = vec![src("a", 1.0), src("b", 3.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Clicks);
        assert_eq!(totals.shares(), vec![("a", 25.0), ("b", 75.0)]);
        assert!(GroupTotals::default().shares().is_empty());
    }

    #[test]
    fn test_serializes_as_object() {
        let rows = vec![src("a", 3.0), src("a", 2.0), src("b", 5.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Clicks);
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json, serde_json::json!({"a": 5.0, "b": 5.0}));
    }

    #[test]
    fn test_serialized_keys_keep_first_seen_order() {
        let rows = vec![src("z", 1.0), src("a", 2.0), src("m", 3.0), src("a", 1.0)];
        let totals = aggregate(&rows, RowField::Name, RowField::Clicks);
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"{"z":1.0,"a":3.0,"m":3.0}"#);
    }
}

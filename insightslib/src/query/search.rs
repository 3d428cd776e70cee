//! Free-text search across a set of columns.

use crate::record::Record;

/// Keep the records where any of `fields` contains `query`, ignoring case.
///
/// A blank query keeps every record. Matching is a plain substring test on
/// each field's string form: no tokenizing, no fuzzy scoring. Input order is
/// preserved.
pub fn search<T: Record + Clone>(records: &[T], query: &str, fields: &[T::Field]) -> Vec<T> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    let matched: Vec<T> = records
        .iter()
        .filter(|record| matches_any(*record, &needle, fields))
        .cloned()
        .collect();

    tracing::debug!(
        query,
        input = records.len(),
        matched = matched.len(),
        "search applied"
    );
    matched
}

/// `needle` must already be lower-cased.
fn matches_any<T: Record>(record: &T, needle: &str, fields: &[T::Field]) -> bool {
    fields.iter().any(|field| {
        record
            .value(*field)
            .to_string()
            .to_lowercase()
            .contains(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{row, sample_rows, RowField};

    #[test]
    fn test_blank_query_keeps_everything() {
        let rows = sample_rows();
        assert_eq!(search(&rows, "", &[RowField::Name]), rows);
        assert_eq!(search(&rows, "   ", &[RowField::Name]), rows);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let rows = vec![row("Summer Sale", 1.0), row("Winter Clearance", 2.0)];
        let found = search(&rows, "SALE", &[RowField::Name]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Summer Sale");
    }

    #[test]
    fn test_numbers_match_on_string_form() {
        let rows = vec![row("a", 1250.0), row("b", 3.5)];
        let found = search(&rows, "125", &[RowField::Clicks]);
        assert_eq!(found, vec![row("a", 1250.0)]);
        let found = search(&rows, "3.5", &[RowField::Clicks]);
        assert_eq!(found, vec![row("b", 3.5)]);
    }

    #[test]
    fn test_any_field_may_match() {
        let rows = vec![row("alpha", 7.0), row("beta", 70.0)];
        let found = search(&rows, "7", &[RowField::Name, RowField::Clicks]);
        assert_eq!(found.len(), 2);
        let found = search(&rows, "alp", &[RowField::Clicks]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_values_never_match() {
        let rows = vec![row("a", 1.0)];
        assert!(search(&rows, "undefined", &[RowField::Note]).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let rows = vec![row("Black Friday", 1.0), row("Blackout", 2.0)];
        let found = search(&rows, "black ", &[RowField::Name]);
        assert_eq!(found, vec![row("Black Friday", 1.0)]);
    }

    #[test]
    fn test_search_over_borrowed_rows() {
        let rows = sample_rows();
        let refs: Vec<_> = rows.iter().collect();
        let found = search(&refs, "a", &[RowField::Name]);
        assert_eq!(found.len(), 2);
        assert!(std::ptr::eq(found[0], &rows[1]));
    }
}

//! Property tests for the table pipeline stages.

use std::cmp::Ordering;

use insightslib::analytics::aggregate;
use insightslib::query::{compare_text, paginate, search, sort, SortDirection};
use insightslib::{Field, Record, Value};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ItemField {
    Name,
    Score,
}

impl Field for ItemField {
    fn name(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Score => "score",
        }
    }

    fn all() -> &'static [Self] {
        &[ItemField::Name, ItemField::Score]
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    position: usize,
    name: String,
    score: f64,
}

impl Record for Item {
    type Field = ItemField;

    fn value(&self, field: ItemField) -> Value<'_> {
        match field {
            ItemField::Name => Value::Text(&self.name),
            ItemField::Score => Value::Number(self.score),
        }
    }
}

/// Items with few distinct names so ties are common.
fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(("[abAB]{0,2}", -50i32..50), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(position, (name, score))| Item {
                position,
                name,
                score: score as f64,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_blank_search_is_identity(rows in items(), query in " {0,3}") {
        prop_assert_eq!(search(&rows, &query, ItemField::all()), rows);
    }

    #[test]
    fn test_search_results_match(rows in items(), query in "[abAB1-4]{1,2}") {
        let needle = query.to_lowercase();
        let found = search(&rows, &query, ItemField::all());
        for item in &found {
            let hit = ItemField::all()
                .iter()
                .any(|f| item.value(*f).to_string().to_lowercase().contains(&needle));
            prop_assert!(hit);
        }
        let expected = rows
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.score.to_string().contains(&needle)
            })
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn test_sort_is_stable_ascending(rows in items()) {
        let sorted = sort(&rows, ItemField::Name, SortDirection::Ascending);
        prop_assert_eq!(sorted.len(), rows.len());
        for pair in sorted.windows(2) {
            match compare_text(&pair[0].name, &pair[1].name) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(pair[0].position < pair[1].position),
                Ordering::Greater => prop_assert!(false, "out of order: {:?}", pair),
            }
        }
    }

    #[test]
    fn test_sort_is_stable_descending(rows in items()) {
        let sorted = sort(&rows, ItemField::Score, SortDirection::Descending);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn test_sort_is_idempotent(rows in items(), descending in any::<bool>()) {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let once = sort(&rows, ItemField::Name, direction);
        let twice = sort(&once, ItemField::Name, direction);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_cover_input(rows in items(), per_page in 1usize..12) {
        let first = paginate(&rows, 1, per_page);
        prop_assert!(!first.meta.has_previous_page);

        let total_pages = first.meta.total_pages;
        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            let cut = paginate(&rows, page, per_page);
            prop_assert!(cut.items.len() <= per_page);
            prop_assert_eq!(cut.meta.has_next_page, page < total_pages);
            prop_assert_eq!(cut.meta.has_previous_page, page > 1);
            rebuilt.extend(cut.items);
        }
        prop_assert_eq!(rebuilt, rows.clone());

        let past_end = paginate(&rows, total_pages + 1, per_page);
        prop_assert!(past_end.items.is_empty());
        prop_assert!(!past_end.meta.has_next_page);
    }

    #[test]
    fn test_aggregate_preserves_total(rows in items()) {
        let totals = aggregate(&rows, ItemField::Name, ItemField::Score);
        let expected: f64 = rows.iter().map(|item| item.score).sum();
        prop_assert_eq!(totals.total(), expected);
        for item in &rows {
            prop_assert!(totals.get(&item.name).is_some());
        }
    }
}

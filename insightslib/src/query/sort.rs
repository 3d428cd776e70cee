//! Stable single-column ordering.

use std::cmp::Ordering;

use crate::record::{Record, Value};

use super::options::SortDirection;

/// Return the records ordered by `key`.
///
/// `SortDirection::None` returns the rows in their incoming order. Text
/// compares alphabetically ignoring case, numbers compare arithmetically and
/// any other pairing (text against number, missing values) compares equal.
/// The sort is stable in both directions: rows with equal keys keep their
/// relative order even when descending.
pub fn sort<T: Record + Clone>(records: &[T], key: T::Field, direction: SortDirection) -> Vec<T> {
    let rows = records.to_vec();
    match direction {
        SortDirection::None => rows,
        SortDirection::Ascending => {
            merge_sort_by(rows, &mut |a: &T, b: &T| compare_values(&a.value(key), &b.value(key)))
        }
        SortDirection::Descending => {
            merge_sort_by(rows, &mut |a: &T, b: &T| compare_values(&b.value(key), &a.value(key)))
        }
    }
}

/// Stable top-down merge sort.
///
/// Accepts non-transitive comparators (mixed columns produce one). A row from
/// the right half only moves ahead of the left when strictly less.
fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => cmp(b, a) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged
}

/// Comparator used by [`sort`].
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(x), Value::Text(y)) => compare_text(x, y),
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Alphabetic comparison in the spirit of a locale collator: letters compare
/// without regard to case first, and only identical-but-for-case strings fall
/// back to lowercase before uppercase.
///
/// Folding works on code points, so only ASCII text orders the way a collator
/// would. Accented letters sort after `z` (`"é" > "z"`) instead of next to
/// their base letter.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Some(Ordering::Less),
                (false, true) => Some(Ordering::Greater),
                _ => None,
            })
            .unwrap_or(Ordering::Equal)
    })
}

//! Input checks for values typed by a user.

use crate::format::parse_date;

/// Whether `text` parses as a date under the same rules as
/// [`format_date`](crate::format::format_date).
pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_ok()
}

/// Whether `text` is a finite number within the optional inclusive bounds.
///
/// ```rust
/// use insightslib::validate::is_valid_number;
///
/// assert!(is_valid_number("42", Some(0.0), Some(100.0)));
/// assert!(!is_valid_number("142", Some(0.0), Some(100.0)));
/// assert!(!is_valid_number("abc", None, None));
/// ```
pub fn is_valid_number(text: &str, min: Option<f64>, max: Option<f64>) -> bool {
    let Ok(value) = text.trim().parse::<f64>() else {
        return false;
    };
    value.is_finite() && !min.is_some_and(|lo| value < lo) && !max.is_some_and(|hi| value > hi)
}

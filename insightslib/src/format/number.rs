//! Number, percentage and currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::record::NumberText;

/// `value` with exactly `decimals` fraction digits. Ties round away from
/// zero on the exact binary value, so `1.25` becomes `"1.3"` while `1.45`
/// (stored as `1.4499...`) stays `"1.4"`.
pub(crate) fn to_fixed(value: f64, decimals: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", decimals as usize, rounded)
        }
        // NaN, infinities and magnitudes past 7.9e28
        None => format!("{:.*}", decimals as usize, value),
    }
}

/// Compact a magnitude with `K`, `M` or `B` suffixes.
///
/// Thresholds include their lower bound (`1000` is `"1.0K"`); suffixed forms
/// carry one decimal place, smaller values print as plain numbers.
///
/// ```rust
/// use insightslib::format::format_number;
///
/// assert_eq!(format_number(999.0), "999");
/// assert_eq!(format_number(1000.0), "1.0K");
/// assert_eq!(format_number(1_500_000.0), "1.5M");
/// ```
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{}B", to_fixed(value / 1_000_000_000.0, 1))
    } else if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed(value / 1_000.0, 1))
    } else {
        NumberText(value).to_string()
    }
}

/// Fixed-decimal percentage, e.g. `format_percentage(12.345, 1) == "12.3%"`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let decimals = u32::try_from(decimals).unwrap_or(u32::MAX).min(MAX_DECIMALS);
    format!("{}%", to_fixed(value, decimals))
}

/// Most fraction digits a percentage can carry.
const MAX_DECIMALS: u32 = 20;

/// Digit grouping rule of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// Groups of three (`1,234,567`)
    Thousands,
    /// Last three, then pairs (`12,34,567`)
    Indian,
}

/// Where the currency symbol goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPosition {
    /// `$1,234`
    Prefix,
    /// `1.234 €` (separated by a no-break space)
    Suffix,
}

/// Number conventions for a locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub grouping: Grouping,
    /// Integer digits required before grouping kicks in
    pub min_grouping_digits: usize,
    pub symbol_position: SymbolPosition,
}

const EN_US: Locale = Locale {
    tag: "en-US",
    group_separator: ",",
    decimal_separator: ".",
    grouping: Grouping::Thousands,
    min_grouping_digits: 4,
    symbol_position: SymbolPosition::Prefix,
};

const LOCALES: &[Locale] = &[
    EN_US,
    Locale {
        tag: "en-GB",
        ..EN_US
    },
    Locale {
        tag: "en-IN",
        grouping: Grouping::Indian,
        ..EN_US
    },
    Locale {
        tag: "de-DE",
        group_separator: ".",
        decimal_separator: ",",
        grouping: Grouping::Thousands,
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Suffix,
    },
    Locale {
        tag: "fr-FR",
        group_separator: "\u{202f}",
        decimal_separator: ",",
        grouping: Grouping::Thousands,
        min_grouping_digits: 4,
        symbol_position: SymbolPosition::Suffix,
    },
    Locale {
        tag: "es-ES",
        group_separator: ".",
        decimal_separator: ",",
        grouping: Grouping::Thousands,
        min_grouping_digits: 5,
        symbol_position: SymbolPosition::Suffix,
    },
    Locale {
        tag: "ja-JP",
        ..EN_US
    },
];

impl Locale {
    /// Look up a locale tag (case-insensitive, `_` or `-`). Unknown tags
    /// fall back to `en-US`.
    pub fn resolve(tag: &str) -> Locale {
        let wanted = tag.replace('_', "-");
        match LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&wanted)) {
            Some(locale) => *locale,
            None => {
                tracing::debug!(tag, "unknown locale, using en-US conventions");
                EN_US
            }
        }
    }

    pub fn supported() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|l| l.tag)
    }

    /// Group the integer digits of `digits` (ASCII, no sign).
    fn group(&self, digits: &str) -> String {
        if digits.len() < self.min_grouping_digits {
            return digits.to_string();
        }
        let bytes = digits.as_bytes();
        let mut groups: Vec<&str> = Vec::new();
        let mut end = bytes.len();
        let mut size = 3;
        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
            if self.grouping == Grouping::Indian {
                size = 2;
            }
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.join(self.group_separator)
    }
}

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Currency amount in a locale's conventions, with 0 to 2 fraction digits.
///
/// Unknown locale tags use `en-US` conventions; unknown currency codes are
/// written out in front of the amount.
///
/// ```rust
/// use insightslib::format::format_currency;
///
/// assert_eq!(format_currency(45670.0, "en-US", "USD"), "$45,670");
/// assert_eq!(format_currency(12.5, "en-US", "USD"), "$12.5");
/// assert_eq!(format_currency(1234.56, "de-DE", "EUR"), "1.234,56\u{a0}€");
/// ```
pub fn format_currency(value: f64, locale: &str, currency: &str) -> String {
    let locale = Locale::resolve(locale);
    let amount = format_amount(value.abs(), &locale);
    let sign = if value < 0.0 && amount.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match (currency_symbol(currency), locale.symbol_position) {
        (Some(symbol), SymbolPosition::Prefix) => format!("{sign}{symbol}{amount}"),
        (Some(symbol), SymbolPosition::Suffix) => format!("{sign}{amount}\u{a0}{symbol}"),
        (None, SymbolPosition::Prefix) => {
            format!("{sign}{}\u{a0}{amount}", currency.to_ascii_uppercase())
        }
        (None, SymbolPosition::Suffix) => {
            format!("{sign}{amount}\u{a0}{}", currency.to_ascii_uppercase())
        }
    }
}

/// Non-negative amount rounded to cents with trailing zeros dropped.
fn format_amount(value: f64, locale: &Locale) -> String {
    if !value.is_finite() {
        return NumberText(value).to_string();
    }
    let fixed = to_fixed(value, 2);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let grouped = locale.group(int_part);
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}{}{frac}", locale.decimal_separator)
    }
}

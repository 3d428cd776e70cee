//! Display formatting for dashboard values.
//!
//! Pure functions from raw numbers and dates to display strings. Chart and
//! table views consume these directly; nothing here knows about chart types.
//!
//! - **Numbers**: `format_number` (1.2K/3.4M/5.6B), `format_percentage`
//! - **Currency**: `format_currency` with a small table of locale conventions
//! - **Dates**: `format_date` (short, long, relative, iso), `relative_time`

pub mod date;
pub mod number;

pub use date::{format_date, format_date_at, parse_date, relative_time, DateFormat, DateInput};
pub use number::{
    format_currency, format_number, format_percentage, Grouping, Locale, SymbolPosition,
};

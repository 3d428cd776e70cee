//! Record model shared by every stage of the table pipeline.
//!
//! The pipeline never looks inside a row directly. Each row type implements
//! [`Record`] and exposes its columns through a typed field enum, so a sort
//! key or search field can only name a column the row actually has.
//!
//! ## Example
//!
//! ```rust
//! use insightslib::{Field, Record, Value};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum PetField { Name, Age }
//!
//! impl Field for PetField {
//!     fn name(self) -> &'static str {
//!         match self { PetField::Name => "name", PetField::Age => "age" }
//!     }
//!     fn all() -> &'static [Self] { &[PetField::Name, PetField::Age] }
//! }
//!
//! struct Pet { name: String, age: u32 }
//!
//! impl Record for Pet {
//!     type Field = PetField;
//!     fn value(&self, field: PetField) -> Value<'_> {
//!         match field {
//!             PetField::Name => Value::Text(&self.name),
//!             PetField::Age => Value::Number(self.age as f64),
//!         }
//!     }
//! }
//!
//! let pet = Pet { name: "Rex".into(), age: 3 };
//! assert_eq!(pet.value(PetField::Age).to_string(), "3");
//! ```

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::InsightsError;

/// A single cell value borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
    /// Text, including enumerated statuses rendered as their label
    Text(&'a str),
    /// Any numeric column
    Number(f64),
    /// Optional column with no value
    Missing,
}

impl Value<'_> {
    /// Numeric view of the value, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view that also accepts text holding a number.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// String form used by search, `In` filters and aggregation labels.
///
/// Numbers render in their shortest round-trip form (`5`, `2.5`), missing
/// values render as the empty string.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", NumberText(*n)),
            Value::Missing => Ok(()),
        }
    }
}

/// Plain rendering of a number: no trailing `.0`, no negative zero.
pub(crate) struct NumberText(pub f64);

impl fmt::Display for NumberText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n.is_infinite() {
            f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", n)
        }
    }
}

/// Column identifier for a record type.
pub trait Field: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Canonical snake_case column name
    fn name(self) -> &'static str;

    /// Every column, in display order
    fn all() -> &'static [Self];
}

/// A row that the table pipeline can search, filter, sort and aggregate.
pub trait Record {
    type Field: Field;

    fn value(&self, field: Self::Field) -> Value<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn value(&self, field: Self::Field) -> Value<'_> {
        (**self).value(field)
    }
}

/// Match `s` against a field set, ignoring case and underscores.
pub(crate) fn parse_field<F: Field>(s: &str, record: &'static str) -> Result<F, InsightsError> {
    let wanted = normalize(s);
    F::all()
        .iter()
        .copied()
        .find(|f| normalize(f.name()) == wanted)
        .ok_or_else(|| InsightsError::UnknownField {
            record,
            field: s.to_string(),
        })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

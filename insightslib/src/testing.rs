//! Small fixed rows shared by the unit tests.

use crate::record::{Field, Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Name,
    Clicks,
    Note,
}

impl Field for RowField {
    fn name(self) -> &'static str {
        match self {
            RowField::Name => "name",
            RowField::Clicks => "clicks",
            RowField::Note => "note",
        }
    }

    fn all() -> &'static [Self] {
        &[RowField::Name, RowField::Clicks, RowField::Note]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub clicks: f64,
    pub note: Option<String>,
}

impl Record for Row {
    type Field = RowField;

    fn value(&self, field: RowField) -> Value<'_> {
        match field {
            RowField::Name => Value::Text(&self.name),
            RowField::Clicks => Value::Number(self.clicks),
            RowField::Note => self.note.as_deref().map_or(Value::Missing, Value::Text),
        }
    }
}

pub fn row(name: &str, clicks: f64) -> Row {
    Row {
        name: name.to_string(),
        clicks,
        note: None,
    }
}

/// `[B(5), A(10), A(3)]`
pub fn sample_rows() -> Vec<Row> {
    vec![row("B", 5.0), row("A", 10.0), row("A", 3.0)]
}

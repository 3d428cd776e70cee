//! Error types for insightslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while shaping or loading dashboard data
#[derive(Error, Debug)]
pub enum InsightsError {
    /// A date string could not be parsed
    #[error("invalid date '{0}'")]
    InvalidDate(String),

    /// A field name does not exist on the record type
    #[error("unknown field '{field}' for {record}")]
    UnknownField { record: &'static str, field: String },

    /// A sort direction string was not recognised
    #[error("unknown sort direction '{0}' (expected asc, desc or none)")]
    UnknownSortDirection(String),

    /// A filter operator string was not recognised
    #[error("unknown filter operator '{0}'")]
    UnknownFilterOperator(String),

    /// A date format mode string was not recognised
    #[error("unknown date format '{0}' (expected short, long, relative or iso)")]
    UnknownDateFormat(String),

    /// Failed to read a snapshot or settings file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A snapshot or settings file did not decode
    #[error("failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// File: crates/daygraph-core/src/error.rs
// Summary: Error types for dataset loading and validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading or validating input rows.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The chart and the summary bindings both need at least one row.
    #[error("dataset is empty")]
    Empty,

    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),

    #[error("records out of order: {next} follows {prev}")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },

    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

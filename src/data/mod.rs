//! Data module - CSV loading and date handling

pub mod dates;
mod loader;

pub use loader::{load_data, LoaderError, Table, DATE_COLUMN};

use thiserror::Error;

/// A requested column is absent from the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{column}' column not found in the dataset (required by {operation})")]
pub struct MissingColumnError {
    pub column: String,
    pub operation: &'static str,
}

impl MissingColumnError {
    pub fn new(column: impl Into<String>, operation: &'static str) -> Self {
        Self {
            column: column.into(),
            operation,
        }
    }
}

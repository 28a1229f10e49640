//! CSV Data Loader Module
//! Handles CSV file loading, column-name normalization and date parsing using Polars.

use super::dates;
use super::MissingColumnError;
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Column every dataset must carry after normalization.
pub const DATE_COLUMN: &str = "date";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),
    #[error("Duplicate column '{0}' after normalizing column names")]
    DuplicateColumn(String),
}

/// An in-memory dataset with normalized column names and a parsed `date` column.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Normalize column names and parse the `date` column of an existing frame.
    pub fn from_dataframe(mut df: DataFrame) -> Result<Self, LoaderError> {
        let names = normalize_column_names(&df)?;
        df.set_column_names(names)?;

        let column = df
            .column(DATE_COLUMN)
            .map_err(|_| MissingColumnError::new(DATE_COLUMN, "load_data"))?;
        let parsed = dates::parse_column(column)?;
        let unparsed = parsed.iter().filter(|v| v.is_none()).count();
        if unparsed > 0 {
            debug!(unparsed, "date values could not be parsed and are missing");
        }
        df.with_column(dates::to_series(DATE_COLUMN.into(), &parsed))?;

        debug!(rows = df.height(), columns = df.width(), "table ready");
        Ok(Self { df })
    }

    /// Look up a column, failing with a typed error naming the operation.
    pub fn column(
        &self,
        name: &str,
        operation: &'static str,
    ) -> Result<&Column, MissingColumnError> {
        self.df
            .column(name)
            .map_err(|_| MissingColumnError::new(name, operation))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Get list of column names.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Read a column as timestamps; values that do not parse are `None`.
    pub fn dates(&self, name: &str) -> Result<Vec<Option<NaiveDateTime>>, LoaderError> {
        Ok(dates::parse_column(self.column(name, "Table::dates")?)?)
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn into_dataframe(self) -> DataFrame {
        self.df
    }

    pub(crate) fn dataframe_mut(&mut self) -> &mut DataFrame {
        &mut self.df
    }
}

fn normalize_column_names(df: &DataFrame) -> Result<Vec<String>, LoaderError> {
    let mut seen = HashSet::new();
    df.get_column_names()
        .iter()
        .map(|raw| {
            let name = raw.trim().to_lowercase();
            if seen.insert(name.clone()) {
                Ok(name)
            } else {
                Err(LoaderError::DuplicateColumn(name))
            }
        })
        .collect()
}

/// Load a CSV file into a [`Table`].
///
/// Every column is read as text; only `date` is converted. The raw header is
/// logged before normalization.
pub fn load_data(file_path: impl AsRef<Path>) -> Result<Table, LoaderError> {
    let df = LazyCsvReader::new(file_path.as_ref())
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    info!("Column names in the dataset: {:?}", df.get_column_names());
    Table::from_dataframe(df)
}

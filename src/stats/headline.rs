//! Headline length statistics.

use super::calculator::{DescriptiveStats, StatsCalculator};
use super::StatsError;
use crate::data::Table;
use polars::prelude::*;
use tracing::debug;

pub const DEFAULT_HEADLINE_COLUMN: &str = "headline";

/// Derived column added by [`calculate_headline_stats`].
pub const HEADLINE_LENGTH_COLUMN: &str = "headline_length";

/// Descriptive statistics of headline character lengths.
pub type HeadlineStats = DescriptiveStats;

/// Measure the character length of every value in `column` and summarize it.
///
/// The lengths are stored on the table as `headline_length` (replacing any
/// previous one). Missing values get a missing length and are left out of the
/// summary.
pub fn calculate_headline_stats(
    table: &mut Table,
    column: &str,
) -> Result<HeadlineStats, StatsError> {
    let text = table
        .column(column, "calculate_headline_stats")?
        .cast(&DataType::String)?;

    let lengths: Vec<Option<u32>> = text
        .str()?
        .into_iter()
        .map(|v| v.map(|s| s.chars().count() as u32))
        .collect();

    let values: Vec<f64> = lengths.iter().flatten().map(|&len| f64::from(len)).collect();
    let stats = StatsCalculator::compute_descriptive_stats(&values);
    debug!(column, measured = values.len(), rows = lengths.len(), "headline lengths");

    let series: UInt32Chunked = lengths.into_iter().collect();
    table
        .dataframe_mut()
        .with_column(series.with_name(HEADLINE_LENGTH_COLUMN.into()).into_series())?;

    Ok(stats)
}

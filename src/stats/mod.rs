//! Statistics module - headline, publisher and publication-trend summaries

mod calculator;
mod headline;
mod publisher;
mod trend;

pub use calculator::{DescriptiveStats, StatsCalculator, LABELS};
pub use headline::{
    calculate_headline_stats, HeadlineStats, DEFAULT_HEADLINE_COLUMN, HEADLINE_LENGTH_COLUMN,
};
pub use publisher::{
    count_articles_per_publisher, PublisherCount, PublisherCounts, DEFAULT_PUBLISHER_COLUMN,
};
pub use trend::{analyze_publication_trends, DailyCount, PublicationTrend, DEFAULT_DATE_COLUMN};

use crate::data::MissingColumnError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

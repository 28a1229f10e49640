//! News Stats - descriptive statistics for news CSV datasets
//!
//! Loads a CSV of news records and summarizes headline lengths, article
//! counts per publisher and daily publication counts.

pub mod data;
pub mod stats;

pub use data::{load_data, LoaderError, MissingColumnError, Table};
pub use stats::{
    analyze_publication_trends, calculate_headline_stats, count_articles_per_publisher,
    HeadlineStats, PublicationTrend, PublisherCounts, StatsError,
};

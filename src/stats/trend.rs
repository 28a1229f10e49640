//! Daily publication counts.

use super::StatsError;
use crate::data::{dates, Table};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub use crate::data::DATE_COLUMN as DEFAULT_DATE_COLUMN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// One entry per calendar day from the first to the last publication, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicationTrend(Vec<DailyCount>);

impl PublicationTrend {
    pub fn iter(&self) -> impl Iterator<Item = &DailyCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, day: NaiveDate) -> Option<usize> {
        let first = self.first_day()?;
        let offset = usize::try_from((day - first).num_days()).ok()?;
        self.0.get(offset).map(|dc| dc.count)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.0.first().map(|dc| dc.day)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.0.last().map(|dc| dc.day)
    }

    /// Number of rows with a usable timestamp.
    pub fn total(&self) -> usize {
        self.0.iter().map(|dc| dc.count).sum()
    }

    pub fn into_vec(self) -> Vec<DailyCount> {
        self.0
    }
}

/// Count publications per calendar day of `column`.
///
/// The column is re-parsed leniently and rows without a timestamp are skipped.
/// Days inside the observed range with no rows are reported with a zero count.
/// The table itself is not modified.
pub fn analyze_publication_trends(
    table: &Table,
    column: &str,
) -> Result<PublicationTrend, StatsError> {
    let parsed = dates::parse_column(table.column(column, "analyze_publication_trends")?)?;

    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ts in parsed.iter().flatten() {
        *buckets.entry(ts.date()).or_insert(0) += 1;
    }
    debug!(
        column,
        rows = parsed.len(),
        dated = buckets.values().sum::<usize>(),
        "publication dates"
    );

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        warn!(column, "no parseable dates; publication trend is empty");
        return Ok(PublicationTrend::default());
    };

    let days = first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| DailyCount {
            day,
            count: buckets.get(&day).copied().unwrap_or(0),
        })
        .collect();
    Ok(PublicationTrend(days))
}

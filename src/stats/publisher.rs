//! Article counts per publisher.

use super::StatsError;
use crate::data::Table;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_PUBLISHER_COLUMN: &str = "publisher";

/// Number of rows carrying one publisher value. `None` groups missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublisherCount {
    pub publisher: Option<String>,
    pub count: usize,
}

/// Publisher counts, most frequent first. Ties keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublisherCounts(Vec<PublisherCount>);

impl PublisherCounts {
    pub fn iter(&self) -> impl Iterator<Item = &PublisherCount> {
        self.0.iter()
    }

    pub fn get(&self, publisher: Option<&str>) -> Option<usize> {
        self.0
            .iter()
            .find(|pc| pc.publisher.as_deref() == publisher)
            .map(|pc| pc.count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, equal to the table height.
    pub fn total(&self) -> usize {
        self.0.iter().map(|pc| pc.count).sum()
    }

    pub fn into_vec(self) -> Vec<PublisherCount> {
        self.0
    }
}

/// Count rows per distinct value of `column`.
pub fn count_articles_per_publisher(
    table: &Table,
    column: &str,
) -> Result<PublisherCounts, StatsError> {
    let text = table
        .column(column, "count_articles_per_publisher")?
        .cast(&DataType::String)?;

    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut counts: Vec<PublisherCount> = Vec::new();
    for value in text.str()?.into_iter() {
        let slot = *index.entry(value).or_insert_with(|| {
            counts.push(PublisherCount {
                publisher: value.map(str::to_string),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    // stable: equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(PublisherCounts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn table(publishers: &[Option<&str>]) -> Result<Table> {
        let dates = vec!["2024-01-01"; publishers.len()];
        Ok(Table::from_dataframe(df!(
            "publisher" => publishers,
            "date" => dates
        )?)?)
    }

    fn pairs(counts: &PublisherCounts) -> Vec<(Option<&str>, usize)> {
        counts
            .iter()
            .map(|pc| (pc.publisher.as_deref(), pc.count))
            .collect()
    }

    #[test]
    fn orders_by_descending_count() -> Result<()> {
        let table = table(&[Some("A"), Some("B"), Some("A"), Some("A"), Some("B")])?;

        let counts = count_articles_per_publisher(&table, DEFAULT_PUBLISHER_COLUMN)?;
        assert_eq!(pairs(&counts), vec![(Some("A"), 3), (Some("B"), 2)]);
        assert_eq!(counts.total(), 5);
        Ok(())
    }

    #[test]
    fn ties_keep_first_appearance() -> Result<()> {
        let table = table(&[
            Some("Zacks"),
            Some("Benzinga"),
            Some("Benzinga"),
            Some("Zacks"),
            Some("AP"),
        ])?;

        let counts = count_articles_per_publisher(&table, "publisher")?;
        assert_eq!(
            pairs(&counts),
            vec![(Some("Zacks"), 2), (Some("Benzinga"), 2), (Some("AP"), 1)]
        );
        Ok(())
    }

    #[test]
    fn missing_publishers_are_grouped() -> Result<()> {
        let table = table(&[None, Some("A"), None])?;

        let counts = count_articles_per_publisher(&table, "publisher")?;
        assert_eq!(counts.get(None), Some(2));
        assert_eq!(counts.get(Some("A")), Some(1));
        assert_eq!(counts.get(Some("B")), None);
        Ok(())
    }

    #[test]
    fn repeated_calls_agree() -> Result<()> {
        let table = table(&[Some("A"), Some("B"), Some("A")])?;

        let first = count_articles_per_publisher(&table, "publisher")?;
        let second = count_articles_per_publisher(&table, "publisher")?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn absent_column_is_reported() -> Result<()> {
        let table = table(&[Some("A")])?;

        let err = count_articles_per_publisher(&table, "source").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'source' column not found in the dataset (required by count_articles_per_publisher)"
        );
        Ok(())
    }
}

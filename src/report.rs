//! Report rendering for the command-line binary.

use news_stats::{HeadlineStats, PublicationTrend, PublisherCounts};
use serde::Serialize;
use std::fmt;

/// All three summaries of one dataset.
#[derive(Debug, Serialize)]
pub struct Report {
    pub headline_stats: HeadlineStats,
    pub publishers: PublisherCounts,
    pub trends: PublicationTrend,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Headline length statistics")?;
        writeln!(f, "  {:<6} {}", "count", self.headline_stats.count)?;
        for (label, value) in &self.headline_stats.labeled()[1..] {
            writeln!(f, "  {label:<6} {value:.6}")?;
        }

        writeln!(f)?;
        writeln!(f, "Articles per publisher ({} publishers)", self.publishers.len())?;
        for pc in self.publishers.iter() {
            let name = pc.publisher.as_deref().unwrap_or("<missing>");
            writeln!(f, "  {name:<40} {}", pc.count)?;
        }

        writeln!(f)?;
        match (self.trends.first_day(), self.trends.last_day()) {
            (Some(first), Some(last)) => {
                writeln!(f, "Publications per day ({first} to {last})")?
            }
            _ => writeln!(f, "Publications per day (no dated rows)")?,
        }
        for dc in self.trends.iter() {
            writeln!(f, "  {} {}", dc.day, dc.count)?;
        }
        Ok(())
    }
}

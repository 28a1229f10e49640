//! News Stats - command-line report over a news CSV dataset.
//!
//! Usage: `news_stats <CSV_PATH> [--json]`

mod report;

use anyhow::{Context, Result};
use news_stats::stats::{DEFAULT_DATE_COLUMN, DEFAULT_HEADLINE_COLUMN, DEFAULT_PUBLISHER_COLUMN};
use news_stats::{
    analyze_publication_trends, calculate_headline_stats, count_articles_per_publisher, load_data,
};
use report::Report;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: news_stats <CSV_PATH> [--json]";

fn main() -> Result<ExitCode> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(ExitCode::SUCCESS);
            }
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                return Ok(ExitCode::from(2));
            }
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let mut table = load_data(&path).with_context(|| format!("failed to load {path}"))?;
    info!(rows = table.height(), "loaded {path}");

    let report = Report {
        headline_stats: calculate_headline_stats(&mut table, DEFAULT_HEADLINE_COLUMN)
            .context("headline statistics")?,
        publishers: count_articles_per_publisher(&table, DEFAULT_PUBLISHER_COLUMN)
            .context("publisher counts")?,
        trends: analyze_publication_trends(&table, DEFAULT_DATE_COLUMN)
            .context("publication trends")?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(ExitCode::SUCCESS)
}

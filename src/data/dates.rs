//! Lenient timestamp parsing.
//! Anything that does not match a known layout becomes `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use polars::prelude::*;
use tracing::warn;

/// Layouts carrying a UTC offset. The offset is dropped, wall-clock time kept.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%dT%H:%M%z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse one raw value into a naive wall-clock timestamp.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Zone a tz-aware `Datetime` column is rendered in.
enum Zone {
    Utc,
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    fn from_dtype(tz: Option<&str>) -> Self {
        let Some(name) = tz else {
            return Zone::Utc;
        };
        if let Ok(tz) = name.parse::<Tz>() {
            Zone::Named(tz)
        } else if let Ok(offset) = name.parse::<FixedOffset>() {
            Zone::Fixed(offset)
        } else {
            warn!(time_zone = name, "unknown time zone; reading timestamps as UTC");
            Zone::Utc
        }
    }

    fn wall_clock(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Zone::Utc => utc.naive_utc(),
            Zone::Named(tz) => utc.with_timezone(tz).naive_local(),
            Zone::Fixed(offset) => utc.with_timezone(offset).naive_local(),
        }
    }
}

fn from_physical(raw: i64, unit: TimeUnit, zone: &Zone) -> Option<NaiveDateTime> {
    let dt = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(raw),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(raw),
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(raw)),
    };
    dt.map(|d| zone.wall_clock(d))
}

/// Read a column as timestamps.
///
/// `Datetime` columns are decoded directly, tz-aware ones into the wall-clock
/// time of their zone; every other dtype is cast to text and run through
/// [`parse_timestamp`].
pub fn parse_column(column: &Column) -> PolarsResult<Vec<Option<NaiveDateTime>>> {
    if let DataType::Datetime(unit, tz) = column.dtype() {
        let unit = *unit;
        let zone = Zone::from_dtype(tz.as_deref());
        let ca = column.datetime()?;
        return Ok(ca
            .physical()
            .into_iter()
            .map(|v| v.and_then(|raw| from_physical(raw, unit, &zone)))
            .collect());
    }

    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|v| v.and_then(parse_timestamp))
        .collect())
}

/// Build a `Datetime(ms)` series from parsed values.
pub fn to_series(name: PlSmallStr, values: &[Option<NaiveDateTime>]) -> Series {
    let millis: Int64Chunked = values
        .iter()
        .map(|v| v.map(|dt| dt.and_utc().timestamp_millis()))
        .collect();
    millis
        .with_name(name)
        .into_datetime(TimeUnit::Milliseconds, None)
        .into_series()
}

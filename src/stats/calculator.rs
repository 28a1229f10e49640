//! Statistics Calculator Module
//! Descriptive summary statistics over a sample of numeric values.

use serde::Serialize;
use statrs::statistics::Statistics;

/// Labels of [`DescriptiveStats::labeled`], in output order.
pub const LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Count, mean, spread and quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub p50: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl DescriptiveStats {
    /// The eight statistics as `(label, value)` pairs; count is widened to f64.
    pub fn labeled(&self) -> [(&'static str, f64); 8] {
        [
            (LABELS[0], self.count as f64),
            (LABELS[1], self.mean),
            (LABELS[2], self.std),
            (LABELS[3], self.min),
            (LABELS[4], self.p25),
            (LABELS[5], self.p50),
            (LABELS[6], self.p75),
            (LABELS[7], self.max),
        ]
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.labeled()
            .into_iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value)
    }
}

/// Handles descriptive statistics calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// `std` is the sample standard deviation and is NaN below two values.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        DescriptiveStats {
            count: n,
            mean: values.mean(),
            std: values.std_dev(),
            min: sorted[0],
            p25: Self::percentile(&sorted, 25.0),
            p50: Self::percentile(&sorted, 50.0),
            p75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let stats = StatsCalculator::compute_descriptive_stats(&[2.0, 4.0, 1.0]);
        assert_eq!(stats.count, 3);
        assert!(approx(stats.mean, 7.0 / 3.0));
        assert!(approx(stats.std, (7.0f64 / 3.0).sqrt()));
        assert_eq!(stats.min, 1.0);
        assert!(approx(stats.p25, 1.5));
        assert!(approx(stats.p50, 2.0));
        assert!(approx(stats.p75, 3.0));
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let stats = StatsCalculator::compute_descriptive_stats(&[5.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 5.0);
        assert!(stats.std.is_nan());
        assert_eq!(stats.p25, 5.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn empty_sample_is_all_nan() {
        let stats = StatsCalculator::compute_descriptive_stats(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.labeled()[1..].iter().all(|(_, v)| v.is_nan()));
    }

    #[test]
    fn labeled_lookup() {
        let stats = StatsCalculator::compute_descriptive_stats(&[1.0, 3.0]);
        assert_eq!(stats.get("count"), Some(2.0));
        assert_eq!(stats.get("50%"), Some(2.0));
        assert_eq!(stats.get("median"), None);
        let labels: Vec<_> = stats.labeled().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, LABELS);
    }
}

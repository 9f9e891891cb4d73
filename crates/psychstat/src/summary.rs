//! Summary statistics for datasets
//!
//! A single serializable record aggregating the descriptive statistics of a
//! dataset, for callers that want every summary in one pass instead of
//! calling the leaf functions individually.

use serde::{Deserialize, Serialize};

use crate::descriptive::{mean, median, rms, standard_deviation, variance};

/// Summary statistics for a numeric dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Standard deviation
    pub std_dev: f64,
    /// Root mean square
    pub rms: f64,
    /// Median (50th percentile)
    pub median: f64,
}

impl Summary {
    /// Compute summary statistics from data.
    ///
    /// No NaN filtering is performed: a non-finite value in the input
    /// surfaces as non-finite statistics, the same propagation contract as
    /// the leaf functions.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        Self {
            count: values.len(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: mean(values),
            variance: variance(values),
            std_dev: standard_deviation(values),
            rms: rms(values),
            median: median(values),
        }
    }

    /// Summary of an empty dataset (all statistics NaN).
    fn empty() -> Self {
        Self {
            count: 0,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
            rms: f64::NAN,
            median: f64::NAN,
        }
    }

    /// Get the range (max - min).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Compute the z-score of a value against this summary.
    pub fn zscore(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_agrees_with_leaf_functions() {
        let values = [1.0, 2.0, 3.0, 5.0, 8.0];
        let summary = Summary::from_values(&values);

        assert_eq!(summary.count, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 8.0);
        assert_eq!(summary.mean, mean(&values));
        assert_eq!(summary.variance, variance(&values));
        assert_eq!(summary.std_dev, standard_deviation(&values));
        assert_eq!(summary.rms, rms(&values));
        assert_eq!(summary.median, median(&values));
    }

    #[test]
    fn summary_of_empty_is_nan() {
        let summary = Summary::from_values(&[]);

        assert_eq!(summary.count, 0);
        assert!(summary.min.is_nan());
        assert!(summary.max.is_nan());
        assert!(summary.mean.is_nan());
        assert!(summary.variance.is_nan());
        assert!(summary.std_dev.is_nan());
        assert!(summary.rms.is_nan());
        assert!(summary.median.is_nan());
    }

    #[test]
    fn summary_round_trips_through_json() {
        let summary = Summary::from_values(&[1.0, 2.0, 3.0, 5.0, 8.0]);

        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();

        assert_eq!(back.count, summary.count);
        assert_eq!(back.mean, summary.mean);
        assert_eq!(back.std_dev, summary.std_dev);
        assert_eq!(back.median, summary.median);
    }

    #[test]
    fn range_and_zscore() {
        let summary = Summary::from_values(&[1.0, 2.0, 3.0, 5.0, 8.0]);

        assert_eq!(summary.range(), 7.0);
        assert!(summary.zscore(summary.mean).abs() < 1e-12);
    }
}

//! Descriptive statistics for summarizing samples.

use crate::{error::StatsError, quantiles};

/// Descriptive statistics summarizing a sample.
///
/// This structure contains common measures of central tendency, dispersion,
/// and shape for a sample of `f64` values. Dispersion uses the sample
/// convention (denominator `n - 1`); shape uses the moment-ratio
/// definitions: Fisher-Pearson skewness `m3 / m2^1.5` and excess kurtosis
/// `m4 / m2^2 - 3`, both over population moments.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean (average) of the sample.
    pub mean: f64,
    /// The median value (interpolated 0.5-quantile) of the sample.
    pub median: f64,
    /// The sample variance (denominator `n - 1`; `0.0` for a single value).
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
    /// Fisher-Pearson skewness. `0.0` when undefined (fewer than 3 values
    /// or zero spread).
    pub skewness: f64,
    /// Excess kurtosis. `0.0` when undefined (fewer than 4 values or zero
    /// spread).
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing
    /// statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values
    ///
    /// # Returns
    ///
    /// * `Ok(DescriptiveStats)` - if the sample contains at least one value
    /// * `Err(StatsError::EmptyInput)` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vertos_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vertos_stats::descriptive::DescriptiveStats;
    /// let mut values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert!((stats.std_dev - 1.5811).abs() < 1e-4);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::EmptyInput);
        };

        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = quantiles::median(sorted_values)?;

        let m2 = sorted_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let m3 = sorted_values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;
        let m4 = sorted_values.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / n;

        let variance = if count > 1 { m2 * n / (n - 1.0) } else { 0.0 };
        let std_dev = variance.sqrt();

        let skewness = if count > 2 && m2 > 0.0 {
            m3 / m2.powf(1.5)
        } else {
            0.0
        };
        let kurtosis = if count > 3 && m2 > 0.0 {
            m4 / (m2 * m2) - 3.0
        } else {
            0.0
        };

        Ok(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            skewness,
            kurtosis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(DescriptiveStats::new([]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_basic_sample() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        // Sample variance: sum((x - 3)^2) / 4 = 10 / 4 = 2.5
        assert!((stats.variance - 2.5).abs() < 1e-12);
        assert!((stats.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        // Symmetric sample
        assert!(stats.skewness.abs() < 1e-12);
        // m2 = 2, m4 = 6.8 -> 6.8 / 4 - 3 = -1.3
        assert!((stats.kurtosis - (-1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values() {
        let stats = DescriptiveStats::new([10.0, 10.0, 10.0]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.skewness, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert_eq!(stats.min, stats.max);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_right_skewed_sample_has_positive_skewness() {
        let stats = DescriptiveStats::new([1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 10.0]).unwrap();
        assert!(stats.skewness > 1.0);
    }

    #[test]
    fn test_even_count_median_is_interpolated() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }
}

//! Gaussian kernel density estimation.
//!
//! Produces the smooth distribution curves shown alongside histograms.
//! The bandwidth uses Silverman's rule of thumb
//! `h = 0.9 * min(s, iqr / 1.34) * n^(-1/5)`, taking whichever spread
//! estimate is positive when the other collapses.

use crate::{descriptive::DescriptiveStats, error::StatsError, normal::INV_SQRT_2PI, quantiles};

/// A Gaussian kernel density estimate over a sample.
///
/// # Examples
///
/// ```
/// use vertos_stats::density::KernelDensity;
///
/// let values = [1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0];
/// let kde = KernelDensity::new(values).unwrap();
/// // Density is highest near the bulk of the sample
/// assert!(kde.evaluate(3.0) > kde.evaluate(8.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensity {
    values: Vec<f64>,
    bandwidth: f64,
}

impl KernelDensity {
    /// Builds an estimate from unsorted values.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values
    ///
    /// # Returns
    ///
    /// * `Ok(KernelDensity)` - if the sample has at least two distinct
    ///   values (a positive bandwidth exists)
    /// * `Err(StatsError::EmptyInput)` - if the sample is empty
    /// * `Err(StatsError::InsufficientData)` - if the sample has fewer than
    ///   two values or zero spread
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);

        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if values.len() < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: values.len(),
            });
        }

        let stats = DescriptiveStats::from_sorted(&values)?;
        let iqr = quantiles::iqr(&values)?;

        // Silverman's rule over whichever spread estimates are positive.
        let spread = [stats.std_dev, iqr / 1.34]
            .into_iter()
            .filter(|s| *s > 0.0)
            .fold(f64::INFINITY, f64::min);
        if !spread.is_finite() {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: 1,
            });
        }

        #[expect(clippy::cast_precision_loss)]
        let bandwidth = 0.9 * spread * (values.len() as f64).powf(-0.2);

        Ok(Self { values, bandwidth })
    }

    /// The bandwidth selected by Silverman's rule.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluates the density estimate at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.values.len() as f64;
        let sum: f64 = self
            .values
            .iter()
            .map(|v| {
                let z = (x - v) / self.bandwidth;
                INV_SQRT_2PI * (-0.5 * z * z).exp()
            })
            .sum();
        sum / (n * self.bandwidth)
    }

    /// Samples the density curve over `num_points` evenly spaced positions
    /// spanning `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 2` or `max < min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vertos_stats::density::KernelDensity;
    ///
    /// let kde = KernelDensity::new([1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let curve = kde.curve(0.0, 5.0, 11);
    /// assert_eq!(curve.len(), 11);
    /// assert_eq!(curve[0].0, 0.0);
    /// assert_eq!(curve[10].0, 5.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn curve(&self, min: f64, max: f64, num_points: usize) -> Vec<(f64, f64)> {
        assert!(num_points >= 2, "a curve needs at least two points");
        assert!(max >= min, "curve range must not be reversed");

        let step = (max - min) / (num_points - 1) as f64;
        (0..num_points)
            .map(|i| {
                let x = min + i as f64 * step;
                (x, self.evaluate(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(KernelDensity::new([]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_degenerate_samples() {
        assert_eq!(
            KernelDensity::new([5.0]),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            KernelDensity::new([5.0, 5.0, 5.0]),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_bandwidth_is_positive() {
        let kde = KernelDensity::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(kde.bandwidth() > 0.0);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let kde = KernelDensity::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        // Trapezoidal integral over a range wide enough to capture the tails
        let curve = kde.curve(-20.0, 30.0, 2001);
        let mut integral = 0.0;
        for pair in curve.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            integral += 0.5 * (y0 + y1) * (x1 - x0);
        }
        assert!((integral - 1.0).abs() < 0.01, "integral = {integral}");
    }

    #[test]
    fn test_density_is_symmetric_for_symmetric_sample() {
        let kde = KernelDensity::new([-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
        assert!((kde.evaluate(1.5) - kde.evaluate(-1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_iqr_collapse_falls_back_to_std_dev() {
        // Heavily repeated central value gives IQR 0 but positive variance
        let kde = KernelDensity::new([1.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0]).unwrap();
        assert!(kde.bandwidth() > 0.0);
    }
}

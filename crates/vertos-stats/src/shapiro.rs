//! Shapiro-Wilk normality test.
//!
//! Implements Royston's AS R94 algorithm (Royston 1995), the same
//! formulation used by R's `shapiro.test` and scipy's `shapiro`:
//!
//! 1. Expected normal order statistics via Blom scores
//!    `m_i = ppf((i - 0.375) / (n + 0.25))`.
//! 2. Normalized weights with polynomial corrections for the one (n <= 5)
//!    or two (n > 5) extreme weights.
//! 3. `W = (sum a_i x_(i))^2 / sum (x_i - mean)^2`.
//! 4. p-value: exact for n = 3; a log-normal approximation of the
//!    distribution of `W` for 4 <= n <= 11 and n >= 12.
//!
//! The approximation of the p-value loses accuracy for very large samples
//! (above roughly n = 5000); the statistic itself remains well defined.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::{
    error::StatsError,
    normal::{blom_scores, norm_cdf},
};

/// Result of a Shapiro-Wilk normality test.
///
/// The statistic `W` lies in `(0, 1]`; values near 1 are consistent with a
/// normal sample. The p-value is the probability of observing a `W` at
/// least this small under the null hypothesis of normality.
///
/// # Examples
///
/// ```
/// use vertos_stats::shapiro::ShapiroWilk;
///
/// // An evenly spaced triple is perfectly linear against normal scores.
/// let test = ShapiroWilk::test([1.0, 2.0, 3.0]).unwrap();
/// assert!(test.statistic > 0.99);
/// assert!(test.p_value > 0.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    /// The W statistic.
    pub statistic: f64,
    /// The p-value for the null hypothesis that the sample is normal.
    pub p_value: f64,
}

impl ShapiroWilk {
    /// Minimum number of observations the test is defined for.
    pub const MIN_SAMPLES: usize = 3;

    /// Runs the test on unsorted values.
    ///
    /// This method will sort the values internally.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values
    ///
    /// # Returns
    ///
    /// * `Ok(ShapiroWilk)` - statistic and p-value
    /// * `Err(StatsError::InsufficientData)` - if fewer than
    ///   [`Self::MIN_SAMPLES`] values are supplied, or if all values are
    ///   identical (the statistic's denominator vanishes, so a zero-range
    ///   sample carries no distributional information)
    pub fn test<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Runs the test on pre-sorted values.
    ///
    /// See [`Self::test`] for the error conditions. A sample of exactly
    /// three distinct-valued observations is the smallest the test
    /// accepts and uses Royston's exact p-value formula.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        if n < Self::MIN_SAMPLES {
            return Err(StatsError::InsufficientData {
                required: Self::MIN_SAMPLES,
                actual: n,
            });
        }
        if sorted_values[n - 1] - sorted_values[0] <= 0.0 {
            // All values identical: one usable observation out of the two
            // distinct ones the statistic needs.
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: 1,
            });
        }

        let weights = shapiro_weights(n);

        let n_f = n as f64;
        let mean = sorted_values.iter().sum::<f64>() / n_f;
        let denominator = sorted_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        let numerator = weights
            .iter()
            .zip(sorted_values)
            .map(|(a, x)| a * x)
            .sum::<f64>()
            .powi(2);
        let statistic = (numerator / denominator).min(1.0);

        let p_value = p_value(statistic, n);

        Ok(Self { statistic, p_value })
    }
}

/// Computes the Shapiro-Wilk weight vector for a sample of size `n >= 3`.
///
/// The weights are antisymmetric: `a_i = -a_(n+1-i)`.
#[expect(clippy::cast_precision_loss)]
fn shapiro_weights(n: usize) -> Vec<f64> {
    if n == 3 {
        return vec![-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2];
    }

    let m = blom_scores(n);
    let ssq_m = m.iter().map(|v| v * v).sum::<f64>();
    let rsqrt_ssq = 1.0 / ssq_m.sqrt();
    let u = 1.0 / (n as f64).sqrt();

    // Royston's polynomial corrections for the extreme weights.
    let a_last = m[n - 1] * rsqrt_ssq
        + u * (0.221_157 + u * (-0.147_981 + u * (-2.071_190 + u * (4.434_685 + u * -2.706_056))));

    let mut a = vec![0.0; n];
    a[n - 1] = a_last;
    a[0] = -a_last;

    let phi = if n > 5 {
        let a_second = m[n - 2] * rsqrt_ssq
            + u * (0.042_981
                + u * (-0.293_762 + u * (-1.752_461 + u * (5.682_633 + u * -3.582_633))));
        a[n - 2] = a_second;
        a[1] = -a_second;
        (ssq_m - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * a_last.powi(2) - 2.0 * a_second.powi(2))
    } else {
        (ssq_m - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * a_last.powi(2))
    };

    let interior = if n > 5 { 2..n - 2 } else { 1..n - 1 };
    let scale = 1.0 / phi.sqrt();
    for i in interior {
        a[i] = m[i] * scale;
    }
    a
}

/// The p-value of an observed statistic `w` for sample size `n`.
#[expect(clippy::cast_precision_loss)]
fn p_value(w: f64, n: usize) -> f64 {
    let n_f = n as f64;

    if n == 3 {
        // Exact distribution of W for n = 3.
        let p = 6.0 / PI * (w.sqrt().asin() - 0.75_f64.sqrt().asin());
        return p.clamp(0.0, 1.0);
    }

    let z = if n <= 11 {
        let gamma = -2.273 + 0.459 * n_f;
        let transform_arg = gamma - (1.0 - w).ln();
        if transform_arg <= 0.0 {
            // W below the support of the transform: overwhelming evidence
            // against normality.
            return 0.0;
        }
        let w1 = -transform_arg.ln();
        let mu = 0.544 + n_f * (-0.399_78 + n_f * (0.025_054 + n_f * -0.000_671_4));
        let sigma = (1.3822 + n_f * (-0.778_57 + n_f * (0.062_767 + n_f * -0.002_032_2))).exp();
        (w1 - mu) / sigma
    } else {
        let ln_n = n_f.ln();
        let w1 = (1.0 - w).ln();
        let mu = -1.5861 + ln_n * (-0.310_82 + ln_n * (-0.083_751 + ln_n * 0.003_891_5));
        let sigma = (-0.4803 + ln_n * (-0.082_676 + ln_n * 0.003_030_2)).exp();
        (w1 - mu) / sigma
    };

    norm_cdf(-z)
}

//! The normal (Gaussian) distribution and related scalar functions.
//!
//! The quantile-quantile plot builder and the Shapiro-Wilk test both need
//! scalar evaluations of the standard normal CDF and its inverse. The
//! implementations here are the classic closed-form approximations:
//! Abramowitz & Stegun 7.1.26 for the error function (absolute error below
//! `1.5e-7`) and Acklam's rational approximation for the inverse CDF
//! (relative error below `1.2e-9`).

/// A normal distribution parameterised by mean and standard deviation.
///
/// # Examples
///
/// ```
/// use vertos_stats::normal::Normal;
///
/// let n = Normal::standard();
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-12);
/// assert!((n.pdf(0.0) - 0.39894).abs() < 1e-5);
///
/// let n = Normal::new(100.0, 15.0);
/// assert!((n.cdf(100.0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// # Panics
    ///
    /// Panics if `std_dev` is not finite and positive.
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        assert!(
            std_dev.is_finite() && std_dev > 0.0,
            "standard deviation must be finite and positive"
        );
        assert!(mean.is_finite(), "mean must be finite");
        Self { mean, std_dev }
    }

    /// Creates the standard normal distribution N(0, 1).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// The mean parameter.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The standard deviation parameter.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// Probability density function at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.std_dev
    }

    /// Cumulative distribution function: P(X <= x).
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        norm_cdf(self.standardize(x))
    }

    /// Survival function: P(X > x).
    #[must_use]
    pub fn sf(&self, x: f64) -> f64 {
        norm_cdf(-self.standardize(x))
    }

    /// Quantile function (inverse CDF).
    ///
    /// # Panics
    ///
    /// Panics unless `p` is strictly between 0 and 1.
    #[must_use]
    pub fn ppf(&self, p: f64) -> f64 {
        self.mean + self.std_dev * norm_ppf(p)
    }
}

/// Standard normal PDF constant: 1/sqrt(2 pi).
pub(crate) const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function, Abramowitz & Stegun formula 7.1.26.
///
/// Absolute error below `1.5e-7` over the whole real line.
#[must_use]
pub fn erf(x: f64) -> f64 {
    const P: f64 = 0.327_591_1;
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Complementary error function: `erfc(x) = 1 - erf(x)`.
#[must_use]
pub fn erfc(x: f64) -> f64 {
    1.0 - erf(x)
}

/// Standard normal CDF.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal quantile function (inverse CDF), Acklam's algorithm.
///
/// # Panics
///
/// Panics unless `p` is strictly between 0 and 1.
#[must_use]
pub fn norm_ppf(p: f64) -> f64 {
    assert!(
        p > 0.0 && p < 1.0,
        "probability must be strictly between 0 and 1"
    );

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Expected standard normal order statistics via Blom's approximation.
///
/// Returns the scores `m_i = ppf((i - 0.375) / (n + 0.25))` for
/// `i = 1..=n`. These are the plotting positions used by normal
/// quantile-quantile plots and the Shapiro-Wilk weights.
///
/// # Examples
///
/// ```
/// use vertos_stats::normal::blom_scores;
///
/// let scores = blom_scores(5);
/// assert_eq!(scores.len(), 5);
/// // Antisymmetric around the middle score
/// assert!((scores[0] + scores[4]).abs() < 1e-12);
/// assert!(scores[2].abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn blom_scores(n: usize) -> Vec<f64> {
    let n_f = n as f64;
    (1..=n)
        .map(|i| norm_ppf((i as f64 - 0.375) / (n_f + 0.25)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_known_values() {
        assert!(erf(0.0).abs() < 1e-12);
        assert!((erf(1.0) - 0.842_700_79).abs() < 1e-6);
        assert!((erf(-1.0) + 0.842_700_79).abs() < 1e-6);
        assert!((erf(3.0) - 0.999_977_91).abs() < 1e-6);
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((norm_cdf(1.959_964) - 0.975).abs() < 1e-4);
        assert!((norm_cdf(-1.959_964) - 0.025).abs() < 1e-4);
        assert!(norm_cdf(-10.0) < 1e-10);
        assert!(norm_cdf(10.0) > 1.0 - 1e-10);
    }

    #[test]
    fn test_norm_ppf_known_values() {
        assert!(norm_ppf(0.5).abs() < 1e-9);
        assert!((norm_ppf(0.975) - 1.959_963_985).abs() < 1e-6);
        assert!((norm_ppf(0.025) + 1.959_963_985).abs() < 1e-6);
        assert!((norm_ppf(0.001) + 3.090_232_306).abs() < 1e-6);
    }

    #[test]
    fn test_ppf_cdf_round_trip() {
        for &p in &[0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999] {
            let x = norm_ppf(p);
            // Round trip limited by the erf approximation, not the ppf
            assert!((norm_cdf(x) - p).abs() < 1e-6, "p = {p}");
        }
    }

    #[test]
    fn test_distribution_with_parameters() {
        let n = Normal::new(100.0, 15.0);
        assert!((n.cdf(100.0) - 0.5).abs() < 1e-12);
        assert!((n.ppf(0.5) - 100.0).abs() < 1e-6);
        assert!((n.cdf(130.0) - 0.977_25).abs() < 1e-4);
        assert!((n.sf(130.0) - 0.022_75).abs() < 1e-4);
    }

    #[test]
    fn test_pdf_is_symmetric() {
        let n = Normal::standard();
        assert!((n.pdf(1.3) - n.pdf(-1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_blom_scores_are_antisymmetric_and_increasing() {
        let scores = blom_scores(10);
        for i in 0..5 {
            assert!((scores[i] + scores[9 - i]).abs() < 1e-9);
        }
        assert!(scores.is_sorted_by(|a, b| a < b));
    }

    #[test]
    #[should_panic(expected = "strictly between")]
    fn test_ppf_rejects_zero() {
        let _ = norm_ppf(0.0);
    }

    #[test]
    #[should_panic(expected = "standard deviation")]
    fn test_zero_std_dev_panics() {
        let _ = Normal::new(0.0, 0.0);
    }
}

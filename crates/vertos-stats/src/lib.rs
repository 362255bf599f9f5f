//! Statistical primitives for the Vertos project.
//!
//! This crate provides the pure computational kernel used by the dataset
//! analysis tools:
//!
//! - **Descriptive statistics**: count, min/max, mean, median, sample
//!   variance and standard deviation, skewness, excess kurtosis
//! - **Quantiles**: linearly interpolated quantiles and the interquartile
//!   range
//! - **Histogram generation**: equal-width frequency bins, optionally over
//!   explicit bounds so several samples can share an axis
//! - **Kernel density estimation**: Gaussian KDE with Silverman bandwidth
//!   for smooth distribution curves
//! - **Normal distribution**: pdf/cdf/quantile function plus the normal
//!   order scores used by probability plots
//! - **Normality testing**: the Shapiro-Wilk W statistic and p-value
//!
//! All computations are pure functions over immutable slices of `f64`
//! values; nothing in this crate performs I/O or holds shared state.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`quantiles`]: Quantile computation and the interquartile range
//! - [`histogram`]: Histogram construction for visualizing distributions
//! - [`density`]: Gaussian kernel density estimation
//! - [`normal`]: The normal distribution and related scalar functions
//! - [`shapiro`]: Shapiro-Wilk normality test
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use vertos_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert!((stats.std_dev - 1.5811).abs() < 1e-4);
//! ```
//!
//! ## Computing the interquartile range
//!
//! ```
//! use vertos_stats::quantiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(quantiles::iqr(&values).unwrap(), 2.0);
//! ```
//!
//! ## Testing a sample for normality
//!
//! ```
//! use vertos_stats::shapiro::ShapiroWilk;
//!
//! let values = [2.1, 3.4, 1.9, 2.8, 3.1, 2.5, 2.2, 3.0, 2.7, 2.4];
//! let test = ShapiroWilk::test(values).unwrap();
//! assert!(test.statistic > 0.8);
//! assert!(test.p_value > 0.05);
//! ```

pub mod density;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod normal;
pub mod quantiles;
pub mod shapiro;

pub use self::error::StatsError;

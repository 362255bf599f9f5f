//! Grouped statistical analysis of the biomechanics dataset.
//!
//! This crate turns a loaded [`Dataset`](vertos_dataset::Dataset) into the
//! numeric artifacts the reporting tools display: per-class summary tables
//! and the series handed to an external plotting facility.
//!
//! # Overview
//!
//! The analysis supports two main workflows:
//!
//! ## Summary Workflow
//!
//! Compute per-class aggregates for one numeric column:
//!
//! 1. **Partition** the dataset rows by class label
//! 2. **Aggregate** each partition ([`summary::GroupedSummary`]): count,
//!    mean, sample standard deviation, interquartile range, and the
//!    Shapiro-Wilk normality outcome
//! 3. Optionally compute the full descriptive table per class
//!    ([`summary::describe_by_class`])
//!
//! ## Plot Data Workflow
//!
//! Build serializable series for distribution and relationship plots
//! ([`plot`]): overlaid histograms, kernel density curves, normal
//! quantile-quantile points, and class-colored scatter tuples.
//!
//! All computations are pure functions over the immutable dataset; results
//! are recomputed fully on each invocation.
//!
//! # Examples
//!
//! ```no_run
//! use vertos_analysis::summary::GroupedSummary;
//! use vertos_dataset::{Dataset, FeatureColumn};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::load_csv("column_3C.csv")?;
//! let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence)?;
//!
//! for group in &summary.groups {
//!     println!(
//!         "{}: n={}, mean={:.2}, sd={:.2}, iqr={:.2}",
//!         group.class, group.count, group.mean, group.std_dev, group.iqr
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod plot;
pub mod summary;

pub use self::error::AnalysisError;

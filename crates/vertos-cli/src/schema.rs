//! Serialized report artifacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vertos_analysis::summary::{GroupSummary, NormalityResult};
use vertos_dataset::{ClassLabel, FeatureColumn};
use vertos_stats::descriptive::DescriptiveStats;

/// Grouped summary report written by the `summarize` command.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Path of the dataset the report was computed from.
    pub dataset: String,
    /// Total number of records in the dataset.
    pub total_records: usize,
    /// One entry per summarized column.
    pub columns: Vec<ColumnSummary>,
}

/// Per-class summary of one column.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColumnSummary {
    pub column: FeatureColumn,
    pub groups: Vec<GroupReport>,
}

/// All aggregates of one class partition, flattened for serialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupReport {
    pub class: ClassLabel,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub normality: NormalityResult,
}

impl GroupReport {
    /// Merges the six-field group summary with the full descriptive
    /// statistics of the same partition.
    pub fn new(summary: &GroupSummary, descriptives: &DescriptiveStats) -> Self {
        Self {
            class: summary.class,
            count: summary.count,
            mean: summary.mean,
            std_dev: summary.std_dev,
            iqr: summary.iqr,
            min: descriptives.min,
            max: descriptives.max,
            median: descriptives.median,
            skewness: descriptives.skewness,
            kurtosis: descriptives.kurtosis,
            normality: summary.normality,
        }
    }
}

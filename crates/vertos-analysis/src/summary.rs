//! Per-class summary aggregation.
//!
//! The grouped summary partitions the dataset rows by class label and
//! aggregates one numeric column per partition. The partition is exact:
//! every row belongs to exactly one group, so group counts always sum to
//! the dataset row count.

use serde::{Deserialize, Serialize};
use vertos_dataset::{ClassLabel, Dataset, FeatureColumn};
use vertos_stats::{
    StatsError, descriptive::DescriptiveStats, quantiles, shapiro::ShapiroWilk,
};

use crate::error::AnalysisError;

/// Outcome of the normality test on one group.
///
/// The outcome is explicit rather than degenerate: a group too small (or
/// too uniform) to test reports the condition instead of a meaningless
/// statistic.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum NormalityResult {
    /// The Shapiro-Wilk test ran; `statistic` is the W statistic.
    Tested { statistic: f64, p_value: f64 },
    /// The group had fewer usable observations than the test requires.
    InsufficientData { required: usize, actual: usize },
}

/// Aggregates for one class partition of a numeric column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupSummary {
    /// The class label this group collects.
    pub class: ClassLabel,
    /// Number of rows in the group.
    pub count: usize,
    /// Arithmetic mean of the column values.
    pub mean: f64,
    /// Sample standard deviation (denominator `n - 1`).
    pub std_dev: f64,
    /// Interquartile range (0.75-quantile minus 0.25-quantile, linearly
    /// interpolated).
    pub iqr: f64,
    /// Normality test outcome for the group.
    pub normality: NormalityResult,
}

/// Per-class summaries of one numeric column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupedSummary {
    /// The summarized column.
    pub column: FeatureColumn,
    /// One summary per class observed in the dataset, in class reporting
    /// order.
    pub groups: Vec<GroupSummary>,
}

impl GroupedSummary {
    /// Computes the per-class summary of `column`.
    ///
    /// Rows are partitioned by class label; each partition is aggregated
    /// into a [`GroupSummary`]. Groups are reported in ascending class
    /// order (`Hernia`, `Spondylolisthesis`, `Normal`), which is
    /// deterministic regardless of row order. A group with fewer than
    /// [`ShapiroWilk::MIN_SAMPLES`] rows, or whose values are all
    /// identical, reports [`NormalityResult::InsufficientData`]; exactly
    /// three distinct-valued rows is the smallest group that tests.
    ///
    /// # Returns
    ///
    /// * `Ok(GroupedSummary)` - one group per class observed
    /// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
    pub fn compute(dataset: &Dataset, column: FeatureColumn) -> Result<Self, AnalysisError> {
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let groups = dataset
            .partition_by_class(column)
            .into_iter()
            .map(|(class, mut values)| {
                values.sort_by(f64::total_cmp);
                let stats = DescriptiveStats::from_sorted(&values)?;
                let iqr = quantiles::iqr(&values)?;
                let normality = match ShapiroWilk::from_sorted(&values) {
                    Ok(test) => NormalityResult::Tested {
                        statistic: test.statistic,
                        p_value: test.p_value,
                    },
                    Err(StatsError::InsufficientData { required, actual }) => {
                        NormalityResult::InsufficientData { required, actual }
                    }
                    Err(err) => return Err(err.into()),
                };
                Ok(GroupSummary {
                    class,
                    count: stats.count,
                    mean: stats.mean,
                    std_dev: stats.std_dev,
                    iqr,
                    normality,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        Ok(Self { column, groups })
    }

    /// Total number of rows across all groups.
    ///
    /// Equals the row count of the dataset the summary was computed from.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|group| group.count).sum()
    }
}

/// Full descriptive statistics for one class partition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptives {
    /// The class label this group collects.
    pub class: ClassLabel,
    /// Descriptive statistics of the column values in the group.
    pub stats: DescriptiveStats,
}

/// Computes the full descriptive table of `column`, one row per class.
///
/// This supplements [`GroupedSummary::compute`] with the remaining
/// descriptive measures (min, max, median, skewness, kurtosis) for display
/// in wide tables. Groups are reported in ascending class order.
///
/// # Returns
///
/// * `Ok(Vec<ClassDescriptives>)` - one entry per class observed
/// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
pub fn describe_by_class(
    dataset: &Dataset,
    column: FeatureColumn,
) -> Result<Vec<ClassDescriptives>, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    dataset
        .partition_by_class(column)
        .into_iter()
        .map(|(class, values)| {
            let stats = DescriptiveStats::new(values)?;
            Ok(ClassDescriptives { class, stats })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use vertos_dataset::PatientRecord;

    use super::*;

    fn record(class: ClassLabel, value: f64) -> PatientRecord {
        PatientRecord {
            pelvic_incidence: value,
            pelvic_tilt: 0.0,
            lumbar_lordosis_angle: 0.0,
            sacral_slope: 0.0,
            pelvic_radius: 0.0,
            degree_spondylolisthesis: 0.0,
            class,
        }
    }

    fn dataset(groups: &[(ClassLabel, &[f64])]) -> Dataset {
        let records = groups
            .iter()
            .flat_map(|(class, values)| values.iter().map(|&v| record(*class, v)))
            .collect();
        Dataset::from_records(records)
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_records(vec![]);
        assert_eq!(
            GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence),
            Err(AnalysisError::EmptyInput)
        );
        assert_eq!(
            describe_by_class(&dataset, FeatureColumn::PelvicIncidence).unwrap_err(),
            AnalysisError::EmptyInput
        );
    }

    #[test]
    fn test_worked_example() {
        // Group A: [1..=5]; group B: three identical values.
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0, 3.0, 4.0, 5.0]),
            (ClassLabel::Normal, &[10.0, 10.0, 10.0]),
        ]);
        let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert_eq!(summary.groups.len(), 2);

        let a = &summary.groups[0];
        assert_eq!(a.class, ClassLabel::Hernia);
        assert_eq!(a.count, 5);
        assert_eq!(a.mean, 3.0);
        assert!((a.std_dev - 1.5811).abs() < 1e-4);
        assert!(matches!(a.normality, NormalityResult::Tested { .. }));

        // Zero-range group: std 0, normality fails even though n = 3.
        let b = &summary.groups[1];
        assert_eq!(b.class, ClassLabel::Normal);
        assert_eq!(b.std_dev, 0.0);
        assert_eq!(b.iqr, 0.0);
        assert!(matches!(
            b.normality,
            NormalityResult::InsufficientData { .. }
        ));
    }

    #[test]
    fn test_three_distinct_values_are_tested() {
        let dataset = dataset(&[(ClassLabel::Normal, &[1.0, 2.0, 4.0])]);
        let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert!(matches!(
            summary.groups[0].normality,
            NormalityResult::Tested { .. }
        ));
    }

    #[test]
    fn test_two_rows_are_insufficient() {
        let dataset = dataset(&[(ClassLabel::Hernia, &[1.0, 2.0])]);
        let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert_eq!(
            summary.groups[0].normality,
            NormalityResult::InsufficientData {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_partition_reproduces_row_count() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0, 3.0]),
            (ClassLabel::Spondylolisthesis, &[4.0, 5.0]),
            (ClassLabel::Normal, &[6.0, 7.0, 8.0, 9.0]),
        ]);
        let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert_eq!(summary.total_count(), dataset.len());
    }

    #[test]
    fn test_groups_are_in_class_order_regardless_of_row_order() {
        let dataset = dataset(&[
            (ClassLabel::Normal, &[6.0, 7.0]),
            (ClassLabel::Hernia, &[1.0, 2.0]),
            (ClassLabel::Spondylolisthesis, &[4.0, 5.0]),
        ]);
        let summary = GroupedSummary::compute(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        let classes: Vec<_> = summary.groups.iter().map(|g| g.class).collect();
        assert_eq!(
            classes,
            vec![
                ClassLabel::Hernia,
                ClassLabel::Spondylolisthesis,
                ClassLabel::Normal
            ]
        );
    }

    #[test]
    fn test_iqr_is_translation_invariant_per_group() {
        let base = dataset(&[(ClassLabel::Hernia, &[2.0, 4.0, 7.0, 11.0, 16.0])]);
        let shifted = dataset(&[(ClassLabel::Hernia, &[102.0, 104.0, 107.0, 111.0, 116.0])]);
        let base_iqr = GroupedSummary::compute(&base, FeatureColumn::PelvicIncidence).unwrap()
            .groups[0]
            .iqr;
        let shifted_iqr = GroupedSummary::compute(&shifted, FeatureColumn::PelvicIncidence)
            .unwrap()
            .groups[0]
            .iqr;
        assert!((base_iqr - shifted_iqr).abs() < 1e-9);
    }

    #[test]
    fn test_describe_by_class_covers_shape_measures() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0, 3.0, 4.0, 5.0]),
            (ClassLabel::Normal, &[2.0, 2.0, 2.0, 12.0]),
        ]);
        let table = describe_by_class(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].stats.median, 3.0);
        assert!(table[1].stats.skewness > 0.0);
    }
}

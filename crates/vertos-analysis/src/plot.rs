//! Plot-data builders.
//!
//! Each builder turns the dataset into serializable numeric series for an
//! external plotting facility; nothing here renders anything. Histogram
//! series share explicit bounds so per-class histograms overlay on one
//! axis, and density curves are sampled over the column's full range for
//! the same reason.

use serde::{Deserialize, Serialize};
use vertos_dataset::{ClassLabel, Dataset, FeatureColumn};
use vertos_stats::{
    density::KernelDensity,
    descriptive::DescriptiveStats,
    histogram::Histogram,
    normal::blom_scores,
    shapiro::ShapiroWilk,
};

use crate::error::AnalysisError;

/// One histogram bin of a per-class series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistogramBin {
    /// Inclusive start of the bin range.
    pub start: f64,
    /// Exclusive end of the bin range (the last bin also counts its end).
    pub end: f64,
    /// Number of values in the bin.
    pub count: u64,
}

/// Histogram of one class partition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistogramSeries {
    /// The class this series collects.
    pub class: ClassLabel,
    /// Equal-width bins over the shared column range.
    pub bins: Vec<HistogramBin>,
}

/// One sampled point of a density curve.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Kernel density curve of one class partition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DensitySeries {
    /// The class this series collects.
    pub class: ClassLabel,
    /// The curve, sampled over the column's full range.
    pub points: Vec<DensityPoint>,
}

/// One point of a normal quantile-quantile series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QqPoint {
    /// Theoretical standard normal quantile (Blom plotting position).
    pub theoretical: f64,
    /// Standardized sample quantile.
    pub sample: f64,
}

/// Normal quantile-quantile points of one class partition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QqSeries {
    /// The class this series collects.
    pub class: ClassLabel,
    /// Ordered points; a normal sample lies close to the identity line.
    pub points: Vec<QqPoint>,
}

/// One point of a scatter series: an (x, y) pair tagged with its class.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// The color group of the point.
    pub class: ClassLabel,
}

/// A class partition a distribution plot could not be built for, with the
/// reason it was skipped.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkippedClass {
    pub class: ClassLabel,
    pub reason: String,
}

/// Per-class series plus the partitions that could not be plotted.
///
/// Skipped partitions are reported, never silently dropped: a class with
/// too few rows for a density or quantile-quantile construction appears in
/// `skipped` with the failing condition's message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlotSeries<S> {
    /// The plotted column.
    pub column: FeatureColumn,
    /// One series per plottable class, in class reporting order.
    pub series: Vec<S>,
    /// Classes that could not be plotted.
    pub skipped: Vec<SkippedClass>,
}

/// Builds overlaid per-class histograms of `column`.
///
/// All series share the column's full `[min, max]` range, so their bins
/// align on one axis.
///
/// # Returns
///
/// * `Ok(PlotSeries<HistogramSeries>)` - one series per class observed
/// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
///
/// # Panics
///
/// Panics if `num_bins` is zero.
pub fn histogram_series(
    dataset: &Dataset,
    column: FeatureColumn,
    num_bins: usize,
) -> Result<PlotSeries<HistogramSeries>, AnalysisError> {
    let bounds = column_bounds(dataset, column)?;

    let series = dataset
        .partition_by_class(column)
        .into_iter()
        .map(|(class, mut values)| {
            values.sort_by(f64::total_cmp);
            let histogram = Histogram::from_sorted(&values, num_bins, Some(bounds))?;
            let bins = histogram
                .bins
                .into_iter()
                .map(|bin| HistogramBin {
                    start: bin.range.start,
                    end: bin.range.end,
                    count: bin.count,
                })
                .collect();
            Ok(HistogramSeries { class, bins })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    Ok(PlotSeries {
        column,
        series,
        skipped: vec![],
    })
}

/// Builds per-class kernel density curves of `column`.
///
/// Curves are sampled at `num_points` evenly spaced positions over the
/// column's full range. A class whose partition is too small (or too
/// uniform) for a bandwidth is reported in `skipped`.
///
/// # Returns
///
/// * `Ok(PlotSeries<DensitySeries>)` - plottable classes and skips
/// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
///
/// # Panics
///
/// Panics if `num_points < 2`.
pub fn density_series(
    dataset: &Dataset,
    column: FeatureColumn,
    num_points: usize,
) -> Result<PlotSeries<DensitySeries>, AnalysisError> {
    let (min, max) = column_bounds(dataset, column)?;

    let mut series = vec![];
    let mut skipped = vec![];
    for (class, values) in dataset.partition_by_class(column) {
        match KernelDensity::new(values) {
            Ok(kde) => {
                let points = kde
                    .curve(min, max, num_points)
                    .into_iter()
                    .map(|(x, density)| DensityPoint { x, density })
                    .collect();
                series.push(DensitySeries { class, points });
            }
            Err(err) => skipped.push(SkippedClass {
                class,
                reason: err.to_string(),
            }),
        }
    }

    Ok(PlotSeries {
        column,
        series,
        skipped,
    })
}

/// Builds per-class normal quantile-quantile series of `column`.
///
/// Sample quantiles are standardized by the group's mean and sample
/// standard deviation and paired with Blom plotting positions, the same
/// expected normal order statistics the Shapiro-Wilk test weights. A class
/// with fewer than [`ShapiroWilk::MIN_SAMPLES`] rows, or with zero spread,
/// is reported in `skipped` — the same precondition as the normality test.
///
/// # Returns
///
/// * `Ok(PlotSeries<QqSeries>)` - plottable classes and skips
/// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
pub fn qq_series(
    dataset: &Dataset,
    column: FeatureColumn,
) -> Result<PlotSeries<QqSeries>, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut series = vec![];
    let mut skipped = vec![];
    for (class, mut values) in dataset.partition_by_class(column) {
        values.sort_by(f64::total_cmp);

        // Same usability precondition as the normality test.
        if let Err(err) = ShapiroWilk::from_sorted(&values) {
            skipped.push(SkippedClass {
                class,
                reason: err.to_string(),
            });
            continue;
        }

        let stats = DescriptiveStats::from_sorted(&values)?;
        let points = blom_scores(values.len())
            .into_iter()
            .zip(&values)
            .map(|(theoretical, &value)| QqPoint {
                theoretical,
                sample: (value - stats.mean) / stats.std_dev,
            })
            .collect();
        series.push(QqSeries { class, points });
    }

    Ok(PlotSeries {
        column,
        series,
        skipped,
    })
}

/// Builds the class-colored scatter series of `y_column` against
/// `x_column`, one tuple per row in row order.
///
/// # Returns
///
/// * `Ok(Vec<ScatterPoint>)` - one point per row
/// * `Err(AnalysisError::EmptyInput)` - if the dataset has no rows
pub fn scatter_series(
    dataset: &Dataset,
    x_column: FeatureColumn,
    y_column: FeatureColumn,
) -> Result<Vec<ScatterPoint>, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    Ok(dataset
        .records()
        .iter()
        .map(|record| ScatterPoint {
            x: record.feature(x_column),
            y: record.feature(y_column),
            class: record.class,
        })
        .collect())
}

fn column_bounds(dataset: &Dataset, column: FeatureColumn) -> Result<(f64, f64), AnalysisError> {
    let values = dataset.column(column);
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use vertos_dataset::PatientRecord;

    use super::*;

    fn record(class: ClassLabel, x: f64, y: f64) -> PatientRecord {
        PatientRecord {
            pelvic_incidence: x,
            pelvic_tilt: y,
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
            .flat_map(|(class, values)| values.iter().map(|&v| record(*class, v, 2.0 * v)))
            .collect();
        Dataset::from_records(records)
    }

    #[test]
    fn test_empty_dataset_fails_every_builder() {
        let empty = Dataset::from_records(vec![]);
        let column = FeatureColumn::PelvicIncidence;
        assert_eq!(
            histogram_series(&empty, column, 10).unwrap_err(),
            AnalysisError::EmptyInput
        );
        assert_eq!(
            density_series(&empty, column, 50).unwrap_err(),
            AnalysisError::EmptyInput
        );
        assert_eq!(
            qq_series(&empty, column).unwrap_err(),
            AnalysisError::EmptyInput
        );
        assert_eq!(
            scatter_series(&empty, column, FeatureColumn::PelvicTilt).unwrap_err(),
            AnalysisError::EmptyInput
        );
    }

    #[test]
    fn test_histogram_series_share_bounds_and_count_all_rows() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0, 3.0]),
            (ClassLabel::Normal, &[8.0, 9.0, 10.0]),
        ]);
        let plot = histogram_series(&dataset, FeatureColumn::PelvicIncidence, 9).unwrap();
        assert_eq!(plot.series.len(), 2);
        for series in &plot.series {
            assert_eq!(series.bins.len(), 9);
            assert_eq!(series.bins[0].start, 1.0);
            assert_eq!(series.bins[8].end, 10.0);
        }
        let total: u64 = plot
            .series
            .iter()
            .flat_map(|s| &s.bins)
            .map(|bin| bin.count)
            .sum();
        assert_eq!(usize::try_from(total).unwrap(), dataset.len());
    }

    #[test]
    fn test_density_series_spans_full_range_and_skips_tiny_class() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0, 3.0, 4.0, 5.0]),
            (ClassLabel::Normal, &[10.0]),
        ]);
        let plot = density_series(&dataset, FeatureColumn::PelvicIncidence, 21).unwrap();
        assert_eq!(plot.series.len(), 1);
        assert_eq!(plot.series[0].class, ClassLabel::Hernia);
        assert_eq!(plot.series[0].points.len(), 21);
        assert_eq!(plot.series[0].points[0].x, 1.0);
        assert_eq!(plot.series[0].points[20].x, 10.0);

        assert_eq!(plot.skipped.len(), 1);
        assert_eq!(plot.skipped[0].class, ClassLabel::Normal);
        assert!(plot.skipped[0].reason.contains("insufficient data"));
    }

    #[test]
    fn test_qq_series_is_standardized_and_ordered() {
        let dataset = dataset(&[(
            ClassLabel::Spondylolisthesis,
            &[3.0, 1.0, 4.0, 1.5, 5.0, 9.0, 2.6, 5.3, 5.8, 9.7],
        )]);
        let plot = qq_series(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        let points = &plot.series[0].points;
        assert_eq!(points.len(), 10);
        assert!(points.is_sorted_by(|a, b| a.theoretical < b.theoretical));
        assert!(points.is_sorted_by(|a, b| a.sample <= b.sample));

        // Standardization keeps the sample mean at zero.
        let mean: f64 = points.iter().map(|p| p.sample).sum::<f64>() / 10.0;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_qq_series_skips_groups_failing_the_test_precondition() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0]),
            (ClassLabel::Normal, &[7.0, 7.0, 7.0, 7.0]),
        ]);
        let plot = qq_series(&dataset, FeatureColumn::PelvicIncidence).unwrap();
        assert!(plot.series.is_empty());
        assert_eq!(plot.skipped.len(), 2);
    }

    #[test]
    fn test_scatter_series_pairs_columns_per_row() {
        let dataset = dataset(&[
            (ClassLabel::Hernia, &[1.0, 2.0]),
            (ClassLabel::Normal, &[3.0]),
        ]);
        let points = scatter_series(
            &dataset,
            FeatureColumn::PelvicIncidence,
            FeatureColumn::PelvicTilt,
        )
        .unwrap();
        assert_eq!(points.len(), 3);
        for point in &points {
            assert_eq!(point.y, 2.0 * point.x);
        }
        assert_eq!(points[2].class, ClassLabel::Normal);
    }
}

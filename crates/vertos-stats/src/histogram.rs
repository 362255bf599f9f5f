//! Histogram construction for visualizing distributions.

use std::ops::Range;

use crate::error::StatsError;

/// A histogram representation of a sample's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// frequency of values falling into each bin. Bounds may be supplied
/// explicitly so that histograms of several samples share the same axis and
/// can be overlaid.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order of range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin covers an inclusive-start, exclusive-end range of values; the
/// last bin additionally includes its end so the sample maximum is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// This method will sort the values internally before binning.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values
    /// * `num_bins` - The number of equal-width bins to create
    /// * `bounds` - If provided, overrides the `(min, max)` bounds derived
    ///   from the values themselves
    ///
    /// # Returns
    ///
    /// * `Ok(Histogram)` - if the sample contains at least one value
    /// * `Err(StatsError::EmptyInput)` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vertos_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, 3, None).unwrap();
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    pub fn new<I>(
        values: I,
        num_bins: usize,
        bounds: Option<(f64, f64)>,
    ) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins, bounds)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order, if
    /// `num_bins` is zero, or if explicit bounds are reversed or do not
    /// cover every value.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn from_sorted(
        sorted_values: &[f64],
        num_bins: usize,
        bounds: Option<(f64, f64)>,
    ) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        assert!(num_bins > 0, "histogram needs at least one bin");

        let (Some(&data_min), Some(&data_max)) = (sorted_values.first(), sorted_values.last())
        else {
            return Err(StatsError::EmptyInput);
        };

        let (min, max) = bounds.unwrap_or((data_min, data_max));
        assert!(min <= max, "histogram bounds must not be reversed");
        assert!(
            min <= data_min && data_max <= max,
            "histogram bounds must cover every value"
        );

        // A zero-width range still yields one counting bin.
        let width = if max > min {
            (max - min) / num_bins as f64
        } else {
            1.0
        };

        let mut bins = (0..num_bins)
            .map(|bin_idx| HistogramBin {
                // Recompute both edges per bin instead of accumulating width,
                // so neighbouring bins share an exact boundary value.
                range: (min + bin_idx as f64 * width)..(min + (bin_idx + 1) as f64 * width),
                count: 0,
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            // Values at the shared max land in the last bin, closing it.
            let idx = (((val - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Ok(Self { bins })
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

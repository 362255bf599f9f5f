//! Plot data command
//!
//! Emits the numeric series behind one plot as JSON, either to stdout or
//! to a file, for consumption by an external plotting facility.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use vertos_analysis::plot::{self, SkippedClass};
use vertos_dataset::FeatureColumn;

use crate::util::{self, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlotKind {
    /// Overlaid per-class histograms
    Histogram,
    /// Per-class kernel density curves
    Density,
    /// Per-class normal quantile-quantile points
    Qq,
    /// Class-colored scatter tuples of two columns
    Scatter,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PlotDataArg {
    /// Path to the dataset CSV file
    pub dataset: PathBuf,

    /// Which plot to build the series for
    #[arg(long, value_enum)]
    kind: PlotKind,

    /// Column to plot (x axis for scatter plots)
    #[arg(long, value_parser = FeatureColumn::from_id)]
    column: FeatureColumn,

    /// Second column for scatter plots (y axis)
    #[arg(long, value_parser = FeatureColumn::from_id)]
    y_column: Option<FeatureColumn>,

    /// Number of histogram bins
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Number of sample points per density curve
    #[arg(long, default_value_t = 200)]
    points: usize,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlotDataArg) -> anyhow::Result<()> {
    let dataset = util::load_dataset(&arg.dataset)?;

    match arg.kind {
        PlotKind::Histogram => {
            let series = plot::histogram_series(&dataset, arg.column, arg.bins)?;
            Output::save_json(&series, arg.output.clone())?;
        }
        PlotKind::Density => {
            let series = plot::density_series(&dataset, arg.column, arg.points)?;
            warn_skipped(&series.skipped);
            Output::save_json(&series, arg.output.clone())?;
        }
        PlotKind::Qq => {
            let series = plot::qq_series(&dataset, arg.column)?;
            warn_skipped(&series.skipped);
            Output::save_json(&series, arg.output.clone())?;
        }
        PlotKind::Scatter => {
            let y_column = arg
                .y_column
                .context("--y-column is required for scatter plots")?;
            let series = plot::scatter_series(&dataset, arg.column, y_column)?;
            Output::save_json(&series, arg.output.clone())?;
        }
    }

    Ok(())
}

fn warn_skipped(skipped: &[SkippedClass]) {
    for skip in skipped {
        log::warn!("class {} skipped: {}", skip.class, skip.reason);
    }
}

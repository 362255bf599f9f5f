//! Grouped summary command
//!
//! Computes per-class summary statistics for the selected columns and
//! prints them as aligned tables; optionally writes the full report as a
//! timestamped JSON artifact.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use vertos_analysis::summary::{
    ClassDescriptives, GroupedSummary, NormalityResult, describe_by_class,
};
use vertos_dataset::{Dataset, FeatureColumn};

use crate::{
    schema::{ColumnSummary, GroupReport, SummaryReport},
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummarizeArg {
    /// Path to the dataset CSV file
    pub dataset: PathBuf,

    /// Column ids to summarize (comma-separated; all columns if omitted)
    #[arg(long, value_delimiter = ',', value_parser = FeatureColumn::from_id)]
    pub columns: Vec<FeatureColumn>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let dataset = util::load_dataset(&arg.dataset)?;
    let columns = if arg.columns.is_empty() {
        FeatureColumn::ALL.to_vec()
    } else {
        arg.columns.clone()
    };

    println!("Grouped Summary Report ({} records)", dataset.len());
    println!("==========================================\n");

    print_legend();
    println!();

    print_class_distribution(&dataset);

    let mut column_summaries = vec![];
    for &column in &columns {
        let summary = GroupedSummary::compute(&dataset, column)?;
        let descriptives = describe_by_class(&dataset, column)?;

        println!();
        print_column_tables(column, &summary, &descriptives);

        let groups = summary
            .groups
            .iter()
            .zip(&descriptives)
            .map(|(group, class_descriptives)| GroupReport::new(group, &class_descriptives.stats))
            .collect();
        column_summaries.push(ColumnSummary { column, groups });
    }

    if let Some(output_path) = &arg.output {
        let report = SummaryReport {
            generated_at: Utc::now(),
            dataset: arg.dataset.display().to_string(),
            total_records: dataset.len(),
            columns: column_summaries,
        };
        Output::save_json(&report, Some(output_path.clone()))?;
        println!("\nSummary report saved to: {}", output_path.display());
    }

    Ok(())
}

fn print_legend() {
    println!("Legend:");
    println!("  StdDev   : Sample standard deviation (denominator n-1)");
    println!("  IQR      : Interquartile range (P75 - P25, linear interpolation)");
    println!("  W        : Shapiro-Wilk statistic (close to 1 for normal samples)");
    println!("  p-value  : Probability of a W at least this small under normality");
    println!("  N/A      : Group too small (or zero spread) for the normality test");
}

#[expect(clippy::cast_precision_loss)]
fn print_class_distribution(dataset: &Dataset) {
    println!("Class Distribution:");
    for (class, count) in dataset.class_counts() {
        println!(
            "  {:<20} {:>6} ({:.1}%)",
            class.to_string(),
            count,
            100.0 * count as f64 / dataset.len() as f64
        );
    }
}

fn print_column_tables(
    column: FeatureColumn,
    summary: &GroupedSummary,
    descriptives: &[ClassDescriptives],
) {
    println!("Column: {column}");
    println!(
        "  {:<20} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Class", "Count", "Mean", "StdDev", "IQR", "W", "p-value",
    );
    println!("  {}", "-".repeat(84));
    for group in &summary.groups {
        let (w_str, p_str) = match group.normality {
            NormalityResult::Tested { statistic, p_value } => {
                (format!("{statistic:.4}"), format!("{p_value:.4}"))
            }
            NormalityResult::InsufficientData { actual, .. } => {
                ("N/A".to_string(), format!("(n={actual})"))
            }
        };
        println!(
            "  {:<20} {:>8} {:>10.2} {:>10.2} {:>10.2} {:>10} {:>10}",
            group.class.to_string(),
            group.count,
            group.mean,
            group.std_dev,
            group.iqr,
            w_str,
            p_str,
        );
    }

    println!();
    println!(
        "  {:<20} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Class", "Min", "Median", "Max", "Skewness", "Kurtosis",
    );
    println!("  {}", "-".repeat(75));
    for class_descriptives in descriptives {
        let stats = &class_descriptives.stats;
        println!(
            "  {:<20} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            class_descriptives.class.to_string(),
            stats.min,
            stats.median,
            stats.max,
            stats.skewness,
            stats.kurtosis,
        );
    }
}

//! Synthetic dataset generation command
//!
//! Generates a dataset with per-class gaussian feature distributions,
//! loosely matched to the published vertebral-column data. Output is
//! deterministic for a given seed, which makes the generated files usable
//! in demos and statistical property tests.

use std::{io::Write as _, path::PathBuf};

use clap::Args;
use rand::SeedableRng as _;
use rand_distr::{Distribution as _, Normal};
use rand_pcg::Pcg64;
use vertos_dataset::{ClassLabel, PatientRecord};

use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArg {
    /// Number of records to generate
    #[arg(long, default_value_t = 310)]
    num_records: usize,

    /// PRNG seed for reproducible output
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Per-class feature profile: (mean, standard deviation) per feature
/// column, in schema order.
struct ClassProfile {
    class: ClassLabel,
    /// Relative share of generated records.
    weight: usize,
    params: [(f64, f64); 6],
}

const PROFILES: [ClassProfile; 3] = [
    ClassProfile {
        class: ClassLabel::Hernia,
        weight: 60,
        params: [
            (47.6, 10.7),
            (17.4, 7.0),
            (35.5, 9.8),
            (30.3, 7.5),
            (116.5, 9.3),
            (2.5, 5.4),
        ],
    },
    ClassProfile {
        class: ClassLabel::Spondylolisthesis,
        weight: 150,
        params: [
            (71.5, 15.1),
            (20.7, 11.5),
            (64.1, 16.4),
            (50.8, 12.3),
            (114.5, 15.6),
            (51.9, 40.0),
        ],
    },
    ClassProfile {
        class: ClassLabel::Normal,
        weight: 100,
        params: [
            (51.7, 12.4),
            (12.8, 6.8),
            (43.5, 12.4),
            (38.9, 9.6),
            (123.9, 9.0),
            (2.2, 6.3),
        ],
    },
];

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    eprintln!(
        "Generating {} synthetic records (seed {})...",
        arg.num_records, arg.seed
    );

    let mut rng = Pcg64::seed_from_u64(arg.seed);
    let mut records = Vec::with_capacity(arg.num_records);
    for (profile, count) in PROFILES.iter().zip(class_counts(arg.num_records)) {
        let mut samplers = Vec::with_capacity(profile.params.len());
        for (mean, std_dev) in profile.params {
            samplers.push(Normal::new(mean, std_dev)?);
        }
        for _ in 0..count {
            let values: Vec<f64> = samplers.iter().map(|dist| dist.sample(&mut rng)).collect();
            records.push(PatientRecord {
                pelvic_incidence: values[0],
                pelvic_tilt: values[1],
                lumbar_lordosis_angle: values[2],
                sacral_slope: values[3],
                pelvic_radius: values[4],
                degree_spondylolisthesis: values[5],
                class: profile.class,
            });
        }
        eprintln!("  {:<20} {count} records", profile.class.to_string());
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    let mut writer = csv::Writer::from_writer(&mut output);
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    drop(writer);
    output.flush()?;

    eprintln!(
        "Generated {} records to {}",
        records.len(),
        output.display_path()
    );

    Ok(())
}

/// Splits `num_records` across the class profiles proportionally to their
/// weights; the last class absorbs the rounding remainder so the counts
/// always sum to `num_records` exactly.
fn class_counts(num_records: usize) -> [usize; 3] {
    let total_weight: usize = PROFILES.iter().map(|profile| profile.weight).sum();
    let mut counts = [0; 3];
    let mut allocated = 0;
    for (i, profile) in PROFILES.iter().enumerate() {
        counts[i] = if i == PROFILES.len() - 1 {
            num_records - allocated
        } else {
            num_records * profile.weight / total_weight
        };
        allocated += counts[i];
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_counts_sum_to_total() {
        for num_records in [0, 1, 7, 310, 311, 1000] {
            let counts = class_counts(num_records);
            assert_eq!(counts.iter().sum::<usize>(), num_records);
        }
    }

    #[test]
    fn test_class_counts_follow_weights() {
        let counts = class_counts(310);
        assert_eq!(counts, [60, 150, 100]);
    }
}

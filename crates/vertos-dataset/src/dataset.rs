//! The in-memory dataset.

use std::{collections::BTreeMap, fs::File, io, path::Path};

use crate::{
    error::DatasetError,
    record::PatientRecord,
    schema::{ClassLabel, FeatureColumn},
};

/// An ordered, immutable sequence of records.
///
/// A dataset is loaded once and never mutated afterwards; all analysis is
/// pure computation over its rows. Row order is the order of the source
/// file (or of the `Vec` it was built from).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<PatientRecord>,
}

impl Dataset {
    /// Wraps an already-loaded sequence of records.
    #[must_use]
    pub fn from_records(records: Vec<PatientRecord>) -> Self {
        Self { records }
    }

    /// Loads a dataset from a CSV file with a header row.
    ///
    /// Columns are matched by header name, so column order in the file does
    /// not matter. Extra columns are ignored; a missing column or a
    /// malformed value fails with a [`DatasetError`] naming the offending
    /// row.
    pub fn load_csv<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::from_csv_reader(io::BufReader::new(file))
    }

    /// Loads a dataset from any CSV source with a header row.
    pub fn from_csv_reader<R>(reader: R) -> Result<Self, DatasetError>
    where
        R: io::Read,
    {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<PatientRecord>, _>>()?;
        Ok(Self { records })
    }

    /// Number of records in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset contains no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in load order.
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Extracts one numeric column, in row order.
    #[must_use]
    pub fn column(&self, column: FeatureColumn) -> Vec<f64> {
        self.records
            .iter()
            .map(|record| record.feature(column))
            .collect()
    }

    /// Extracts one numeric column partitioned by class label.
    ///
    /// Every row lands in exactly one partition, so the partition sizes sum
    /// to [`Self::len`]. Partitions are keyed in class reporting order;
    /// classes absent from the dataset are absent from the map.
    #[must_use]
    pub fn partition_by_class(&self, column: FeatureColumn) -> BTreeMap<ClassLabel, Vec<f64>> {
        let mut partitions: BTreeMap<ClassLabel, Vec<f64>> = BTreeMap::new();
        for record in &self.records {
            partitions
                .entry(record.class)
                .or_default()
                .push(record.feature(column));
        }
        partitions
    }

    /// Number of records per class label, in class reporting order.
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<ClassLabel, usize> {
        let mut counts: BTreeMap<ClassLabel, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.class).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
pelvic_incidence,pelvic_tilt,lumbar_lordosis_angle,sacral_slope,pelvic_radius,degree_spondylolisthesis,class
63.03,22.55,39.61,40.48,98.67,-0.25,Hernia
39.06,10.06,25.02,29.0,114.41,4.56,Hernia
68.83,22.22,50.09,46.61,105.99,-3.53,Spondylolisthesis
69.3,24.65,44.31,44.64,101.87,11.21,Spondylolisthesis
49.71,9.65,28.32,40.06,108.17,7.92,Normal
";

    fn load() -> Dataset {
        Dataset::from_csv_reader(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_loads_all_rows_in_order() {
        let dataset = load();
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.records()[0].pelvic_incidence, 63.03);
        assert_eq!(dataset.records()[4].class, ClassLabel::Normal);
    }

    #[test]
    fn test_column_extraction_preserves_row_order() {
        let dataset = load();
        let tilts = dataset.column(FeatureColumn::PelvicTilt);
        assert_eq!(tilts, vec![22.55, 10.06, 22.22, 24.65, 9.65]);
    }

    #[test]
    fn test_partition_is_exact() {
        let dataset = load();
        let partitions = dataset.partition_by_class(FeatureColumn::SacralSlope);
        let partitioned_rows: usize = partitions.values().map(Vec::len).sum();
        assert_eq!(partitioned_rows, dataset.len());
        assert_eq!(partitions[&ClassLabel::Hernia].len(), 2);
        assert_eq!(partitions[&ClassLabel::Spondylolisthesis].len(), 2);
        assert_eq!(partitions[&ClassLabel::Normal].len(), 1);
    }

    #[test]
    fn test_partitions_iterate_in_reporting_order() {
        let dataset = load();
        let classes: Vec<_> = dataset
            .partition_by_class(FeatureColumn::PelvicRadius)
            .into_keys()
            .collect();
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
    fn test_class_counts() {
        let counts = load().class_counts();
        assert_eq!(counts[&ClassLabel::Hernia], 2);
        assert_eq!(counts[&ClassLabel::Normal], 1);
    }

    #[test]
    fn test_unknown_class_label_is_a_parse_error() {
        let csv = "\
pelvic_incidence,pelvic_tilt,lumbar_lordosis_angle,sacral_slope,pelvic_radius,degree_spondylolisthesis,class
63.03,22.55,39.61,40.48,98.67,-0.25,Scoliosis
";
        let err = Dataset::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let csv = "\
pelvic_incidence,pelvic_tilt,class
63.03,22.55,Hernia
";
        let err = Dataset::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn test_empty_file_loads_as_empty_dataset() {
        let csv = "pelvic_incidence,pelvic_tilt,lumbar_lordosis_angle,sacral_slope,pelvic_radius,degree_spondylolisthesis,class\n";
        let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }
}

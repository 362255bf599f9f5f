//! Tabular data model for the vertebral-column biomechanics dataset.
//!
//! This crate owns the fixed column schema, the record type, and the
//! in-memory dataset the analysis tools operate on.
//!
//! # Data Structure
//!
//! ```text
//! Dataset
//! └─ records: Vec<PatientRecord>
//!     ├─ six numeric biomechanical features (FeatureColumn)
//!     └─ one categorical class label (ClassLabel)
//! ```
//!
//! A dataset is loaded once (usually from a CSV file with a header row) and
//! is immutable afterwards; every record carries exactly one class label, so
//! any per-class partition of the dataset is exact.
//!
//! # Examples
//!
//! ```no_run
//! use vertos_dataset::{Dataset, FeatureColumn};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::load_csv("column_3C.csv")?;
//! println!("Loaded {} records", dataset.len());
//!
//! // Extract one column, grouped by class
//! let by_class = dataset.partition_by_class(FeatureColumn::PelvicIncidence);
//! for (class, values) in &by_class {
//!     println!("{class}: {} values", values.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod error;
pub mod record;
pub mod schema;

pub use self::{
    dataset::Dataset,
    error::DatasetError,
    record::PatientRecord,
    schema::{ClassLabel, FeatureColumn, UnknownColumnError},
};

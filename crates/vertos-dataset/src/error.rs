//! Dataset loading failures.

use std::{io, path::PathBuf};

/// Failure while loading a dataset.
///
/// Every condition is reported to the caller; nothing is retried. CSV
/// parsing errors carry the row position of the offending record, so an
/// unknown class label or a malformed number is reported with the line it
/// occurred on.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[display("failed to open dataset file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// A row of the CSV could not be parsed into a record.
    #[display("failed to parse dataset: {source}")]
    Parse { source: csv::Error },
}

impl From<csv::Error> for DatasetError {
    fn from(source: csv::Error) -> Self {
        DatasetError::Parse { source }
    }
}

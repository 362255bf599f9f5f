//! Analysis failures.

use vertos_stats::StatsError;

/// Failure while computing an analysis artifact.
///
/// Every condition is reported to the caller; nothing is retried or
/// silently recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    /// The dataset contains no rows.
    #[display("dataset contains no rows")]
    EmptyInput,
    /// A statistical computation failed on a partition.
    #[display("statistics failed: {_0}")]
    #[from]
    Stats(StatsError),
}

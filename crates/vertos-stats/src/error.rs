/// Failure conditions shared by the statistical computations in this crate.
///
/// Every condition is reported to the caller; nothing is retried or silently
/// recovered with a degenerate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The input contained no values.
    #[display("input contains no values")]
    EmptyInput,
    /// The input contained fewer usable observations than the computation
    /// requires (e.g. a normality test on fewer than three values, or on a
    /// sample whose values are all identical).
    #[display("insufficient data: {required} usable observations required, found {actual}")]
    InsufficientData { required: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(StatsError::EmptyInput.to_string(), "input contains no values");
        let err = StatsError::InsufficientData {
            required: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: 3 usable observations required, found 2"
        );
    }
}

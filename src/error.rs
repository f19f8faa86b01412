// =============================================================================
// Core error types
// =============================================================================
//
// Three failure kinds cover the whole core:
//
//   InvalidArgument       — caller passed a bad day count or indicator period.
//   InsufficientHistory   — a computation was requested with too little data
//                           for a meaningful result (precondition violation).
//   DataSourceUnavailable — the file-backed source could not supply a ticker.
//
// Synthetic generation never produces these for numeric trouble: it degrades
// to an empty series instead, so chart/table consumers render a uniform empty
// state.

use thiserror::Error;

/// Errors surfaced by the data sources, indicator library, and advisor.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller-supplied parameter (day count, indicator period).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough bars for the requested computation.
    #[error("insufficient history: need {required} bars, got {actual}")]
    InsufficientHistory {
        /// Minimum number of bars required.
        required: usize,
        /// Number of bars actually provided.
        actual: usize,
    },

    /// File-backed source has no data for the requested ticker.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(String),
}

impl Error {
    /// Shorthand for an `InvalidArgument` with a message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Shorthand for a `DataSourceUnavailable` with a message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Error::DataSourceUnavailable(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = Error::invalid_argument("days must be > 0");
        assert_eq!(e.to_string(), "invalid argument: days must be > 0");

        let e = Error::InsufficientHistory {
            required: 20,
            actual: 10,
        };
        assert_eq!(e.to_string(), "insufficient history: need 20 bars, got 10");

        let e = Error::unavailable("no sheet for XYZ");
        assert_eq!(e.to_string(), "data source unavailable: no sheet for XYZ");
    }
}

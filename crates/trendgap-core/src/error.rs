//! Error types for trendgap-core.
//!
//! Row-level failures ([`TrendGapError::Parse`]) are recovered by the report
//! builder. The remaining variants are dataset-level and abort the whole
//! analysis.

use thiserror::Error;

/// The main error type for trendgap operations.
#[derive(Debug, Error)]
pub enum TrendGapError {
    /// The CSV header has no `Timestamp` field.
    #[error("CSV file must contain a 'Timestamp' column.")]
    MissingColumn,

    /// A single timestamp could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No row survived parsing.
    #[error("No valid timestamps found in the file.")]
    EmptyDataset,

    /// The input could not be read as CSV.
    #[error("Invalid CSV: {0}")]
    Csv(String),
}

impl From<csv::Error> for TrendGapError {
    fn from(err: csv::Error) -> Self {
        TrendGapError::Csv(err.to_string())
    }
}

/// Result type alias for trendgap operations.
pub type Result<T> = std::result::Result<T, TrendGapError>;

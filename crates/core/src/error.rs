//! Error types for the sentiment-trends system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sentiment-trends system.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected caller argument (empty term, empty dataset, unknown term).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row's date could not be turned into a year bucket.
    #[error("Date parse error at row {row}: cannot derive a year from {value:?}")]
    DateParse {
        /// Zero-based row index in the input dataset.
        row: usize,
        /// The date as it appeared in the row.
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (invalid or inconsistent input data).
    #[error("Data error: {0}")]
    Data(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a date parse error.
    pub fn date_parse(row: usize, value: impl Into<String>) -> Self {
        Error::DateParse {
            row,
            value: value.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Whether this error is one of the caller-argument rejections.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

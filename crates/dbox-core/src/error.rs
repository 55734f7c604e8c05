//! Error types for dbox.

use thiserror::Error;

/// Main error type for dbox operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No ruler line among the scanned candidate lines
    #[error("No ruler line found in the first {scanned} lines; input is not box-table data")]
    MissingRuler {
        /// Number of leading lines that were available to the scan
        scanned: usize,
    },

    /// Neither a file path nor raw text was supplied
    #[error("No input source: supply a file path or raw text")]
    MissingInput,

    /// Ruler found at a position no dialect uses
    #[error("Unsupported ruler position: line {0}")]
    UnsupportedRulerPosition(usize),

    /// Encoding label not recognized
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Column name not present in the header
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Invalid regular expression in a pattern override
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

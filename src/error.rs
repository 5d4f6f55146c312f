//! Error types for rowkey
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RowKeyError
pub type Result<T> = std::result::Result<T, RowKeyError>;

/// Unified error type for rowkey operations
#[derive(Debug, Error)]
pub enum RowKeyError {
    /// The input bytes are not a valid group-escaped engine key.
    ///
    /// Callers should treat this as a data-corruption signal on the
    /// ingested range and abort the scan: misreading a marker byte risks
    /// silently merging unrelated entries as duplicates.
    #[error("malformed key encoding: {0}")]
    MalformedEncoding(String),
}

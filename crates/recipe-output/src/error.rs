//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A record carries NaN or an infinity.
    #[error("record {index} (originalId {original_id}) has non-finite {field}: {value}")]
    NonFinite {
        index: usize,
        original_id: i64,
        field: &'static str,
        value: f64,
    },

    /// JSON serialization failed.
    #[error("failed to serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temp file could not be moved over the destination.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_message_names_the_record() {
        let err = OutputError::NonFinite {
            index: 3,
            original_id: 99,
            field: "calories",
            value: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "record 3 (originalId 99) has non-finite calories: inf"
        );
    }
}

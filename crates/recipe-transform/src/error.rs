//! Error types for recipe normalization.

use recipe_ingest::LiteralError;
use recipe_model::RecipeColumn;
use thiserror::Error;

/// A single cell that could not be decoded.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The row has no `id` value.
    #[error("missing recipe id")]
    MissingId,

    /// Text that should be an integer is not.
    #[error("invalid integer '{value}'")]
    InvalidInteger { value: String },

    /// Text that should be a number is not.
    #[error("invalid number '{value}'")]
    InvalidNumber { value: String },

    /// The cell is not well-formed literal text.
    #[error("malformed literal: {0}")]
    Literal(#[from] LiteralError),

    /// The literal decoded to the wrong shape.
    #[error("expected {expected}, found {found}")]
    UnexpectedLiteral {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors raised while transforming the table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A cell of one row failed to normalize.
    #[error("line {line}, column '{column}': {source}")]
    Row {
        line: u64,
        column: RecipeColumn,
        #[source]
        source: NormalizeError,
    },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_errors_name_their_location() {
        let err = TransformError::Row {
            line: 42,
            column: RecipeColumn::Nutrition,
            source: NormalizeError::InvalidNumber {
                value: "lots".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "line 42, column 'nutrition': invalid number 'lots'"
        );
    }
}

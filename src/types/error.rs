/// Validation errors for schema info documents

use thiserror::Error;

/// A schema value failed validation
///
/// Raised when a document field holds a value outside its closed
/// enumeration or violates a field constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    /// Literal is not a member of the enumeration
    #[error("Unknown {kind} literal: {value:?}")]
    UnknownLiteral { kind: &'static str, value: String },

    /// Chunk size below zero
    #[error("Field {field} must be non-negative, got {value}")]
    NegativeChunkSize { field: &'static str, value: i64 },

    /// Document root is not a YAML mapping
    #[error("Expected a mapping at the root of a {kind} document")]
    NotAMapping { kind: &'static str },

    /// Field failed to deserialize (wrong type, bad literal)
    #[error("Invalid {kind} document: {message}")]
    Document { kind: &'static str, message: String },
}

impl SchemaValidationError {
    pub(crate) fn unknown_literal(kind: &'static str, value: impl Into<String>) -> Self {
        SchemaValidationError::UnknownLiteral {
            kind,
            value: value.into(),
        }
    }
}

/// Check that a chunk size field is non-negative
pub(crate) fn check_chunk_size(
    field: &'static str,
    value: i64,
) -> Result<(), SchemaValidationError> {
    if value < 0 {
        return Err(SchemaValidationError::NegativeChunkSize { field, value });
    }
    Ok(())
}

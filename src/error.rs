/// Caller-facing error taxonomy
///
/// Every failure of a load or store lands in exactly one of four
/// categories. Lower-level errors are routed, never retried.

use crate::codec::CodecError;
use crate::storage::StorageError;
use crate::types::SchemaValidationError;
use thiserror::Error;

/// Errors from loading or storing schema documents
#[derive(Error, Debug)]
pub enum InfoError {
    /// Stored text is not well-formed YAML
    #[error("Parse error: {0}")]
    Parse(serde_yaml::Error),

    /// Document is well-formed but invalid
    #[error("Schema validation error: {0}")]
    SchemaValidation(#[from] SchemaValidationError),

    /// Nothing stored at the location
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store failed
    #[error("Storage IO error: {0}")]
    StorageIo(StorageError),
}

/// Result type for schema document operations
pub type InfoResult<T> = Result<T, InfoError>;

impl From<CodecError> for InfoError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Parse(e) => InfoError::Parse(e),
            CodecError::Validation(e) => InfoError::SchemaValidation(e),
            // Emitting YAML only fails when serialization itself does,
            // which surfaces as a document problem
            CodecError::Emit(e) => InfoError::SchemaValidation(SchemaValidationError::Document {
                kind: "document",
                message: e.to_string(),
            }),
        }
    }
}

impl From<StorageError> for InfoError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(location) => InfoError::NotFound(location),
            other => InfoError::StorageIo(other),
        }
    }
}

impl InfoError {
    pub fn is_parse(&self) -> bool {
        matches!(self, InfoError::Parse(_))
    }

    pub fn is_schema_validation(&self) -> bool {
        matches!(self, InfoError::SchemaValidation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InfoError::NotFound(_))
    }

    pub fn is_storage_io(&self) -> bool {
        matches!(self, InfoError::StorageIo(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_routed() {
        let not_found: InfoError = StorageError::NotFound("doc".into()).into();
        assert!(not_found.is_not_found());

        let io: InfoError =
            StorageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "down")).into();
        assert!(io.is_storage_io());

        let corrupt: InfoError = StorageError::Corrupt {
            location: "doc".into(),
            reason: "gap".into(),
        }
        .into();
        assert!(corrupt.is_storage_io());
    }

    #[test]
    fn test_codec_errors_routed() {
        let parse_err = serde_yaml::from_str::<serde_yaml::Value>("a: [b").unwrap_err();
        let parse: InfoError = CodecError::Parse(parse_err).into();
        assert!(parse.is_parse());

        let validation: InfoError = CodecError::Validation(SchemaValidationError::NotAMapping {
            kind: "GraphInfo",
        })
        .into();
        assert!(validation.is_schema_validation());
    }
}

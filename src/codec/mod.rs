/// YAML codec for schema info documents
///
/// `encode` turns a validated document into a YAML mapping keyed by field
/// names. `decode` parses YAML text and builds a validated document, keeping
/// malformed text (`CodecError::Parse`) apart from documents that parse but
/// fail validation (`CodecError::Validation`).

use crate::types::SchemaValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value as YamlValue};
use std::fmt::Debug;
use thiserror::Error;

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    /// Text is not well-formed YAML
    #[error("YAML parse error: {0}")]
    Parse(serde_yaml::Error),

    /// Document could not be turned into YAML
    #[error("YAML emit error: {0}")]
    Emit(serde_yaml::Error),

    /// YAML parsed but the document is invalid
    #[error("Schema validation error: {0}")]
    Validation(#[from] SchemaValidationError),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Capability shared by every top-level schema document
///
/// The bridge and the serializable mixin only depend on this trait.
/// Implementors supply a kind name and `validate`; mapping conversion
/// comes from serde.
pub trait SchemaModel:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Debug + Send + Sync
{
    /// Document kind, used in errors and logs
    const KIND: &'static str;

    /// Check field constraints
    fn validate(&self) -> Result<(), SchemaValidationError>;

    /// Convert to a YAML mapping keyed by field name
    fn to_mapping(&self) -> CodecResult<Mapping> {
        self.validate()?;
        match serde_yaml::to_value(self).map_err(CodecError::Emit)? {
            YamlValue::Mapping(mapping) => Ok(mapping),
            _ => Err(SchemaValidationError::NotAMapping { kind: Self::KIND }.into()),
        }
    }

    /// Build and validate from a YAML mapping
    ///
    /// Unknown keys are dropped and missing keys take their defaults.
    fn from_mapping(mapping: Mapping) -> CodecResult<Self> {
        let model: Self = serde_yaml::from_value(YamlValue::Mapping(mapping)).map_err(|e| {
            SchemaValidationError::Document {
                kind: Self::KIND,
                message: e.to_string(),
            }
        })?;
        model.validate()?;
        Ok(model)
    }
}

/// Encode a document as YAML text
pub fn encode<M: SchemaModel>(model: &M) -> CodecResult<String> {
    let mapping = model.to_mapping()?;
    serde_yaml::to_string(&mapping).map_err(CodecError::Emit)
}

/// Decode YAML text into a validated document
///
/// An empty document decodes to the type's defaults.
pub fn decode<M: SchemaModel>(text: &str) -> CodecResult<M> {
    let value: YamlValue = serde_yaml::from_str(text).map_err(CodecError::Parse)?;
    match value {
        YamlValue::Mapping(mapping) => M::from_mapping(mapping),
        YamlValue::Null => M::from_mapping(Mapping::new()),
        _ => Err(SchemaValidationError::NotAMapping { kind: M::KIND }.into()),
    }
}

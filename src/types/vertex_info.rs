use super::error::{check_chunk_size, SchemaValidationError};
use super::property::{Property, PropertyGroup};
use crate::codec::SchemaModel;
use serde::{Deserialize, Serialize};

/// Vertex type descriptor
///
/// Describes how the vertices of one label are chunked and which property
/// groups hold their columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexInfo {
    /// Vertex label (e.g., "person")
    pub label: String,

    /// Number of vertices per chunk
    pub chunk_size: i64,

    /// Storage prefix of the vertex data
    pub prefix: String,

    pub property_groups: Vec<PropertyGroup>,

    pub version: String,
}

impl VertexInfo {
    /// Create a validated vertex info
    pub fn new(
        label: impl Into<String>,
        chunk_size: i64,
        prefix: impl Into<String>,
        property_groups: Vec<PropertyGroup>,
        version: impl Into<String>,
    ) -> Result<Self, SchemaValidationError> {
        let info = Self {
            label: label.into(),
            chunk_size,
            prefix: prefix.into(),
            property_groups,
            version: version.into(),
        };
        info.validate()?;
        Ok(info)
    }

    /// All property names, group by group, in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.property_groups
            .iter()
            .flat_map(|g| g.properties.iter().map(|p| p.name.as_str()))
            .collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property_group_for(name).is_some()
    }

    /// The group holding the named property
    pub fn property_group_for(&self, name: &str) -> Option<&PropertyGroup> {
        self.property_groups.iter().find(|g| g.has_property(name))
    }

    /// The first property flagged as primary
    pub fn primary_key(&self) -> Option<&Property> {
        self.property_groups
            .iter()
            .flat_map(|g| g.properties.iter())
            .find(|p| p.is_primary)
    }
}

impl SchemaModel for VertexInfo {
    const KIND: &'static str = "VertexInfo";

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_chunk_size("chunk_size", self.chunk_size)
    }
}

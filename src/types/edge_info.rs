use super::adj_list::AdjList;
use super::enums::AdjListType;
use super::error::{check_chunk_size, SchemaValidationError};
use super::property::PropertyGroup;
use crate::codec::SchemaModel;
use serde::{Deserialize, Serialize};

/// Edge type descriptor
///
/// `src_label` and `dst_label` name vertex types; they are not checked
/// against any vertex info here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInfo {
    pub src_label: String,
    pub edge_label: String,
    pub dst_label: String,

    /// Number of edges per chunk
    pub chunk_size: i64,

    /// Number of source vertices per vertex chunk
    pub src_chunk_size: i64,

    /// Number of destination vertices per vertex chunk
    pub dst_chunk_size: i64,

    pub directed: bool,
    pub prefix: String,
    pub adj_lists: Vec<AdjList>,
    pub property_groups: Vec<PropertyGroup>,
    pub version: String,
}

impl EdgeInfo {
    /// Create a validated edge info without adjacency lists or properties
    pub fn new(
        src_label: impl Into<String>,
        edge_label: impl Into<String>,
        dst_label: impl Into<String>,
        chunk_size: i64,
        src_chunk_size: i64,
        dst_chunk_size: i64,
        directed: bool,
    ) -> Result<Self, SchemaValidationError> {
        let info = Self {
            src_label: src_label.into(),
            edge_label: edge_label.into(),
            dst_label: dst_label.into(),
            chunk_size,
            src_chunk_size,
            dst_chunk_size,
            directed,
            ..Default::default()
        };
        info.validate()?;
        Ok(info)
    }

    /// Key of the edge type, `{src}_{edge}_{dst}`
    pub fn concat_key(&self) -> String {
        format!("{}_{}_{}", self.src_label, self.edge_label, self.dst_label)
    }

    pub fn has_adj_list(&self, adj_list_type: AdjListType) -> bool {
        self.adj_list(adj_list_type).is_some()
    }

    pub fn adj_list(&self, adj_list_type: AdjListType) -> Option<&AdjList> {
        self.adj_lists.iter().find(|a| a.aligned_by == adj_list_type)
    }
}

impl SchemaModel for EdgeInfo {
    const KIND: &'static str = "EdgeInfo";

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_chunk_size("chunk_size", self.chunk_size)?;
        check_chunk_size("src_chunk_size", self.src_chunk_size)?;
        check_chunk_size("dst_chunk_size", self.dst_chunk_size)
    }
}

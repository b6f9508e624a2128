use super::enums::{AdjListType, FileType};
use serde::{Deserialize, Serialize};

/// One adjacency list encoding of an edge type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjList {
    /// Whether the list is sorted
    pub ordered: bool,

    /// Orientation and ordering of the list
    pub aligned_by: AdjListType,

    /// Storage prefix of the list chunks
    pub prefix: String,

    pub file_type: FileType,
}

impl AdjList {
    /// Create an adjacency list whose `ordered` flag follows `aligned_by`
    pub fn new(aligned_by: AdjListType, prefix: impl Into<String>, file_type: FileType) -> Self {
        Self {
            ordered: aligned_by.is_ordered(),
            aligned_by,
            prefix: prefix.into(),
            file_type,
        }
    }
}

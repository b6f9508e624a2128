/// Schema model types for GraphAr info documents
///
/// This module defines the value objects stored as YAML:
/// - GarType, FileType, AdjListType: closed enumerations stored as literals
/// - Property, PropertyGroup: column descriptors and their physical grouping
/// - AdjList: one adjacency list encoding of an edge type
/// - VertexInfo, EdgeInfo, GraphInfo: top-level documents

pub mod adj_list;
pub mod edge_info;
pub mod enums;
pub mod error;
pub mod graph_info;
pub mod property;
pub mod vertex_info;

pub use adj_list::AdjList;
pub use edge_info::EdgeInfo;
pub use enums::{AdjListType, FileType, GarType};
pub use error::SchemaValidationError;
pub use graph_info::GraphInfo;
pub use property::{Property, PropertyGroup, Tristate};
pub use vertex_info::VertexInfo;

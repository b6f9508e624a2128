/// GraphAr YAML info store
///
/// Schema descriptors for the GraphAr graph storage format (vertex, edge
/// and graph info documents), persisted as YAML through row-oriented record
/// stores instead of local files.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           GraphAr YAML Info Store                │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   YamlSerializable             │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   YAML Codec (serde_yaml)      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Text Bridge (line records)   │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Record Store                 │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Schema models (VertexInfo, EdgeInfo, GraphInfo, ...)
/// - `codec`: YAML encode/decode over the SchemaModel trait
/// - `storage`: Record store abstraction and bundled stores
/// - `bridge`: Line split/join and store put/get
/// - `serializable`: from_location / to_location for every schema model
/// - `error`: Caller-facing error categories

pub mod bridge;
pub mod codec;
pub mod error;
pub mod serializable;
pub mod storage;
pub mod types;

// Re-export schema types
pub use types::{
    AdjList, AdjListType, EdgeInfo, FileType, GarType, GraphInfo, Property, PropertyGroup,
    SchemaValidationError, Tristate, VertexInfo,
};

// Re-export codec types
pub use codec::{decode, encode, CodecError, CodecResult, SchemaModel};

// Re-export storage types
pub use storage::{
    DirectoryRecordStore, MemoryRecordStore, ReadOrder, RecordStore, RocksDbRecordStore,
    SharedRecordStore, StorageError, StorageResult, TextRecord, WriteMode,
};

// Re-export bridge types
pub use bridge::{join_lines, split_lines, BridgeOptions, LineOrdering, TextBridge};

// Re-export the serializable mixin
pub use error::{InfoError, InfoResult};
pub use serializable::{read_yaml_from_store, write_yaml_to_store, YamlSerializable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

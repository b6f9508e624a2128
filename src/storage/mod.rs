/// Record store abstraction
///
/// A record store keeps data as a collection of rows at a location rather
/// than as a byte stream. This module provides:
/// - RecordStore trait: read and write the text records of a location
/// - MemoryRecordStore: in-process store with optional shuffled reads
/// - DirectoryRecordStore: part files under a local directory
/// - RocksDbRecordStore: records keyed by location in RocksDB
///
/// Every bundled store splits a write into contiguous partitions, the way
/// a distributed writer slices a dataset across workers.

pub mod directory_store;
pub mod error;
pub mod memory_store;
pub mod rocksdb_store;

use async_trait::async_trait;
pub use directory_store::DirectoryRecordStore;
pub use error::{StorageError, StorageResult};
pub use memory_store::{MemoryRecordStore, ReadOrder};
pub use rocksdb_store::RocksDbRecordStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of a text dataset
///
/// `value` is the single text column. `index` is the optional line-index
/// column; it is `None` for stores written without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub index: Option<u64>,
    pub value: String,
}

impl TextRecord {
    /// Record without a line index
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            index: None,
            value: value.into(),
        }
    }

    /// Record carrying its line number
    pub fn indexed(index: u64, value: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            value: value.into(),
        }
    }
}

/// How a write treats records already at the location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace everything at the location
    #[default]
    Overwrite,
    /// Add after the existing records
    Append,
    /// Fail if the location holds records
    ErrorIfExists,
}

/// Row-oriented text record store
///
/// Implementations must:
/// - Fail reads of a location with no records with `StorageError::NotFound`
/// - Replace all prior records on `WriteMode::Overwrite`
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record at a location
    ///
    /// # Returns
    /// * `Ok(records)` in the order the store yields them
    /// * `Err(StorageError::NotFound)` if the location has no records
    async fn read_records(&self, location: &str) -> StorageResult<Vec<TextRecord>>;

    /// Persist records at a location
    ///
    /// # Arguments
    /// * `location` - Target location
    /// * `records` - Records in write order
    /// * `mode` - Treatment of records already at the location
    async fn write_records(
        &self,
        location: &str,
        records: Vec<TextRecord>,
        mode: WriteMode,
    ) -> StorageResult<()>;
}

/// Shared record store handle
pub type SharedRecordStore = Arc<dyn RecordStore>;

/// Default number of write partitions
pub fn default_partitions() -> usize {
    num_cpus::get().max(1)
}

/// Reject locations that cannot be used as keys or paths
pub(crate) fn check_location(location: &str) -> StorageResult<()> {
    if location.is_empty() || location.contains('\0') {
        return Err(StorageError::InvalidLocation(location.to_string()));
    }
    Ok(())
}

/// Split records into at most `partitions` contiguous slices
pub(crate) fn partition_records(
    records: Vec<TextRecord>,
    partitions: usize,
) -> Vec<Vec<TextRecord>> {
    if records.is_empty() {
        return Vec::new();
    }
    let partitions = partitions.clamp(1, records.len());
    let per_partition = records.len().div_ceil(partitions);

    let mut slices: Vec<Vec<TextRecord>> = Vec::with_capacity(partitions);
    let mut iter = records.into_iter().peekable();
    while iter.peek().is_some() {
        slices.push(iter.by_ref().take(per_partition).collect());
    }
    slices
}

/// In-memory record store
///
/// Locations map to a list of partitions. Reads concatenate partitions in
/// write order unless the store is built with `ReadOrder::ShuffledPartitions`,
/// which hands partitions back in a seeded random order the way a store
/// without ordering guarantees may.

use super::error::{StorageError, StorageResult};
use super::{
    check_location, default_partitions, partition_records, RecordStore, TextRecord, WriteMode,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

/// Order in which partitions are returned by reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadOrder {
    /// Partitions in write order
    #[default]
    Preserved,
    /// Partitions shuffled with a fixed seed
    ShuffledPartitions { seed: u64 },
}

/// In-memory record store
pub struct MemoryRecordStore {
    /// Location -> partitions
    locations: RwLock<HashMap<String, Vec<Vec<TextRecord>>>>,

    /// Partitions per write
    partitions: usize,

    read_order: ReadOrder,
}

impl MemoryRecordStore {
    /// Create a store with the default partition count
    pub fn new() -> Self {
        Self::with_partitions(default_partitions())
    }

    /// Create a store splitting each write into `partitions` slices
    pub fn with_partitions(partitions: usize) -> Self {
        Self {
            locations: RwLock::new(HashMap::new()),
            partitions: partitions.max(1),
            read_order: ReadOrder::Preserved,
        }
    }

    /// Set the read order
    pub fn with_read_order(mut self, read_order: ReadOrder) -> Self {
        self.read_order = read_order;
        self
    }

    /// Number of locations holding records
    pub fn len(&self) -> usize {
        self.locations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of partitions stored at a location
    pub fn partition_count(&self, location: &str) -> usize {
        self.locations
            .read()
            .get(location)
            .map(|p| p.len())
            .unwrap_or(0)
    }

    /// Remove a location, returning whether it existed
    pub fn remove(&self, location: &str) -> bool {
        self.locations.write().remove(location).is_some()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn read_records(&self, location: &str) -> StorageResult<Vec<TextRecord>> {
        check_location(location)?;

        let mut partitions = self
            .locations
            .read()
            .get(location)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(location.to_string()))?;

        if let ReadOrder::ShuffledPartitions { seed } = self.read_order {
            let mut rng = StdRng::seed_from_u64(seed);
            partitions.shuffle(&mut rng);
        }

        let records: Vec<TextRecord> = partitions.into_iter().flatten().collect();
        if records.is_empty() {
            return Err(StorageError::NotFound(location.to_string()));
        }

        tracing::debug!(location, records = records.len(), "read records from memory");
        Ok(records)
    }

    async fn write_records(
        &self,
        location: &str,
        records: Vec<TextRecord>,
        mode: WriteMode,
    ) -> StorageResult<()> {
        check_location(location)?;

        let count = records.len();
        let slices = partition_records(records, self.partitions);

        let mut locations = self.locations.write();
        match mode {
            WriteMode::Overwrite => {
                locations.insert(location.to_string(), slices);
            }
            WriteMode::Append => {
                locations
                    .entry(location.to_string())
                    .or_default()
                    .extend(slices);
            }
            WriteMode::ErrorIfExists => {
                let holds_records = locations
                    .get(location)
                    .map_or(false, |partitions| partitions.iter().any(|p| !p.is_empty()));
                if holds_records {
                    return Err(StorageError::AlreadyExists(location.to_string()));
                }
                locations.insert(location.to_string(), slices);
            }
        }

        tracing::debug!(location, records = count, ?mode, "wrote records to memory");
        Ok(())
    }
}

/// RocksDB record store
///
/// Key space design:
/// - Record: rec\0{location}\0{partition:05}\0{row:010} → JSON TextRecord
///
/// Keys sort by partition then row, so a prefix scan yields records in
/// write order. Overwrites delete the whole key range of the location and
/// write the new records in one WriteBatch, so rows committed by another
/// writer between building and committing the batch are removed as well.

use super::error::{StorageError, StorageResult};
use super::{
    check_location, default_partitions, partition_records, RecordStore, TextRecord, WriteMode,
};
use async_trait::async_trait;
use rocksdb::{Options, WriteBatch, DB};
use std::path::Path;
use std::sync::Arc;

/// RocksDB-backed record store
pub struct RocksDbRecordStore {
    /// RocksDB database instance
    db: Arc<DB>,

    /// Partitions per write
    partitions: usize,
}

impl RocksDbRecordStore {
    /// Open (or create) a record store
    ///
    /// # Arguments
    /// * `path` - Path to the database directory
    pub fn new<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path)?;

        Ok(Self {
            db: Arc::new(db),
            partitions: default_partitions(),
        })
    }

    /// Set the number of partitions per write
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    /// Make key prefix for a location
    fn make_location_prefix(&self, location: &str) -> String {
        format!("rec\0{}\0", location)
    }

    /// Exclusive end of the key range of a location
    fn make_location_prefix_end(&self, location: &str) -> String {
        format!("rec\0{}\x01", location)
    }

    /// Make key for one record
    fn make_record_key(&self, location: &str, partition: usize, row: usize) -> String {
        format!("rec\0{}\0{:05}\0{:010}", location, partition, row)
    }

    /// Keys and records currently at a location
    fn scan_location(&self, location: &str) -> StorageResult<Vec<(String, TextRecord)>> {
        let prefix = self.make_location_prefix(location);
        let mut entries = Vec::new();

        for item in self.db.prefix_iterator(prefix.as_bytes()) {
            let (key, value) = item?;
            let key_str = std::str::from_utf8(&key)?;

            // Check if key still matches prefix
            if !key_str.starts_with(&prefix) {
                break;
            }

            let record: TextRecord = serde_json::from_slice(&value)?;
            entries.push((key_str.to_string(), record));
        }

        Ok(entries)
    }

    /// Next free partition number after the existing keys
    fn next_partition(&self, location: &str, keys: &[String]) -> StorageResult<usize> {
        let prefix_len = self.make_location_prefix(location).len();
        let mut next = 0;
        for key in keys {
            let partition: usize = key
                .get(prefix_len..prefix_len + 5)
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| StorageError::Corrupt {
                    location: location.to_string(),
                    reason: format!("malformed record key {:?}", key),
                })?;
            next = next.max(partition + 1);
        }
        Ok(next)
    }

    /// Build the batch for one write without committing it
    fn prepare_batch(
        &self,
        location: &str,
        records: &[TextRecord],
        mode: WriteMode,
    ) -> StorageResult<WriteBatch> {
        let mut batch = WriteBatch::default();
        let first_partition = match mode {
            WriteMode::Overwrite => {
                let start = self.make_location_prefix(location);
                let end = self.make_location_prefix_end(location);
                batch.delete_range(start.as_bytes(), end.as_bytes());
                0
            }
            WriteMode::Append => {
                let existing: Vec<String> = self
                    .scan_location(location)?
                    .into_iter()
                    .map(|(key, _)| key)
                    .collect();
                self.next_partition(location, &existing)?
            }
            WriteMode::ErrorIfExists => {
                if !self.scan_location(location)?.is_empty() {
                    return Err(StorageError::AlreadyExists(location.to_string()));
                }
                0
            }
        };

        let slices = partition_records(records.to_vec(), self.partitions);
        for (offset, slice) in slices.iter().enumerate() {
            for (row, record) in slice.iter().enumerate() {
                let key = self.make_record_key(location, first_partition + offset, row);
                batch.put(key.as_bytes(), serde_json::to_vec(record)?);
            }
        }
        Ok(batch)
    }
}

#[async_trait]
impl RecordStore for RocksDbRecordStore {
    async fn read_records(&self, location: &str) -> StorageResult<Vec<TextRecord>> {
        check_location(location)?;

        let records: Vec<TextRecord> = self
            .scan_location(location)?
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        if records.is_empty() {
            return Err(StorageError::NotFound(location.to_string()));
        }

        tracing::debug!(location, records = records.len(), "read records from rocksdb");
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
        let batch = self.prepare_batch(location, &records, mode)?;
        self.db.write(batch)?;

        tracing::debug!(location, records = count, ?mode, "wrote records to rocksdb");
        Ok(())
    }
}

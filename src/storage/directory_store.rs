/// Directory-backed record store
///
/// Directory layout for a location:
/// - {root}/{location}/part-00000.csv ... one file per write partition
/// - {root}/{location}/_SUCCESS           written after all parts
///
/// Part files are headerless CSV with the columns `index,value`. Parts are
/// written in parallel with rayon and read back in file-name order.
/// Overwrite removes only the parts and marker of the location, so nested
/// locations below it survive. Reads require the marker; parts without one
/// are a write that did not finish.

use super::error::{StorageError, StorageResult};
use super::{
    check_location, default_partitions, partition_records, RecordStore, TextRecord, WriteMode,
};
use async_trait::async_trait;
use rayon::prelude::*;
use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

const SUCCESS_MARKER: &str = "_SUCCESS";

/// Record store writing part files under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryRecordStore {
    root: PathBuf,

    /// Partitions per write
    partitions: usize,
}

impl DirectoryRecordStore {
    /// Create a store rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            partitions: default_partitions(),
        }
    }

    /// Set the number of partitions per write
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the parts of a location
    pub fn location_dir(&self, location: &str) -> StorageResult<PathBuf> {
        check_location(location)?;
        let relative = Path::new(location);
        let only_names = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        // "." and "./" resolve to the root itself
        let below_root = relative
            .components()
            .any(|c| matches!(c, Component::Normal(_)));
        if !only_names || !below_root {
            return Err(StorageError::InvalidLocation(location.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

fn part_name(partition: usize) -> String {
    format!("part-{:05}.csv", partition)
}

fn part_number(path: &Path) -> Option<usize> {
    path.file_name()?
        .to_str()?
        .strip_prefix("part-")?
        .strip_suffix(".csv")?
        .parse()
        .ok()
}

/// Part files of a directory, sorted by part number
fn list_parts(dir: &Path) -> StorageResult<Vec<PathBuf>> {
    let mut parts: Vec<(usize, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(number) = part_number(&path) {
            parts.push((number, path));
        }
    }
    parts.sort_by_key(|(number, _)| *number);
    Ok(parts.into_iter().map(|(_, path)| path).collect())
}

/// Remove the parts and marker of a directory, leaving subdirectories
fn remove_parts(dir: &Path) -> StorageResult<()> {
    let marker = dir.join(SUCCESS_MARKER);
    if marker.exists() {
        fs::remove_file(&marker)?;
    }
    for part in list_parts(dir)? {
        fs::remove_file(part)?;
    }
    Ok(())
}

fn write_part(path: &Path, records: &[TextRecord]) -> StorageResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn read_part(path: &Path) -> StorageResult<Vec<TextRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize::<TextRecord>() {
        records.push(result?);
    }
    Ok(records)
}

fn read_blocking(location: String, dir: PathBuf) -> StorageResult<Vec<TextRecord>> {
    if !dir.is_dir() {
        return Err(StorageError::NotFound(location));
    }

    let parts = list_parts(&dir)?;
    if parts.is_empty() {
        return Err(StorageError::NotFound(location));
    }
    if !dir.join(SUCCESS_MARKER).is_file() {
        return Err(StorageError::Corrupt {
            location,
            reason: format!("{} parts without a {} marker", parts.len(), SUCCESS_MARKER),
        });
    }

    let per_part: Vec<Vec<TextRecord>> = parts
        .par_iter()
        .map(|path| read_part(path))
        .collect::<StorageResult<_>>()?;

    let records: Vec<TextRecord> = per_part.into_iter().flatten().collect();
    if records.is_empty() {
        return Err(StorageError::NotFound(location));
    }
    Ok(records)
}

fn write_blocking(
    location: String,
    dir: PathBuf,
    slices: Vec<Vec<TextRecord>>,
    mode: WriteMode,
) -> StorageResult<()> {
    let first_part = match mode {
        WriteMode::Overwrite => {
            if dir.is_dir() {
                remove_parts(&dir)?;
            }
            0
        }
        WriteMode::Append => {
            if dir.is_dir() {
                list_parts(&dir)?
                    .last()
                    .and_then(|p| part_number(p))
                    .map_or(0, |n| n + 1)
            } else {
                0
            }
        }
        WriteMode::ErrorIfExists => {
            if dir.is_dir() && !list_parts(&dir)?.is_empty() {
                return Err(StorageError::AlreadyExists(location));
            }
            0
        }
    };

    fs::create_dir_all(&dir)?;
    let marker = dir.join(SUCCESS_MARKER);
    if marker.exists() {
        fs::remove_file(&marker)?;
    }

    slices
        .par_iter()
        .enumerate()
        .try_for_each(|(offset, slice)| {
            write_part(&dir.join(part_name(first_part + offset)), slice)
        })?;

    File::create(marker)?;
    Ok(())
}

#[async_trait]
impl RecordStore for DirectoryRecordStore {
    async fn read_records(&self, location: &str) -> StorageResult<Vec<TextRecord>> {
        let dir = self.location_dir(location)?;
        let owned = location.to_string();

        let records = tokio::task::spawn_blocking(move || read_blocking(owned, dir)).await??;

        tracing::debug!(location, records = records.len(), "read records from part files");
        Ok(records)
    }

    async fn write_records(
        &self,
        location: &str,
        records: Vec<TextRecord>,
        mode: WriteMode,
    ) -> StorageResult<()> {
        let dir = self.location_dir(location)?;
        let owned = location.to_string();
        let count = records.len();
        let slices = partition_records(records, self.partitions);
        let parts = slices.len();

        tokio::task::spawn_blocking(move || write_blocking(owned, dir, slices, mode)).await??;

        tracing::debug!(location, records = count, parts, ?mode, "wrote part files");
        Ok(())
    }
}

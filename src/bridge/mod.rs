/// Text bridge between YAML documents and record stores
///
/// Write path: split the document into lines and persist one record per
/// line with an overwrite. Read path: fetch every record of the location,
/// put them back in line order, and join them with newlines.
///
/// # Line ordering
///
/// A record store need not hand rows back in the order they were written.
/// With `LineOrdering::Indexed` every record carries its line number and
/// reads sort on it. With `LineOrdering::StoreOrder` no index is written
/// and the document is only rebuilt correctly when the store preserves
/// write order.

pub mod options;

pub use options::{BridgeOptions, LineOrdering};

use crate::storage::{RecordStore, StorageError, StorageResult, TextRecord, WriteMode};

/// Split a document into lines
///
/// Splits on `'\n'` only. A trailing newline produces a trailing empty
/// line, so `join_lines(&split_lines(t)) == t` for every `t`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Join lines with `'\n'`
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Build the records for a document
pub fn lines_to_records(text: &str, ordering: LineOrdering) -> Vec<TextRecord> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match ordering {
            LineOrdering::Indexed => TextRecord::indexed(i as u64, line),
            LineOrdering::StoreOrder => TextRecord::new(line),
        })
        .collect()
}

/// Rebuild a document from its records
///
/// Records that all carry an index are sorted by it; the indexes must be
/// exactly `0..n`. Otherwise records are taken in store order.
pub fn records_to_text(location: &str, mut records: Vec<TextRecord>) -> StorageResult<String> {
    if records.iter().all(|r| r.index.is_some()) {
        records.sort_by_key(|r| r.index);
        for (expected, record) in records.iter().enumerate() {
            if record.index != Some(expected as u64) {
                return Err(StorageError::Corrupt {
                    location: location.to_string(),
                    reason: format!(
                        "expected line {} but found line {:?}",
                        expected, record.index
                    ),
                });
            }
        }
    } else if records.iter().any(|r| r.index.is_some()) {
        tracing::warn!(location, "mixed indexed and unindexed records, using store order");
    }

    let lines: Vec<String> = records.into_iter().map(|r| r.value).collect();
    Ok(join_lines(&lines))
}

/// Moves YAML text between the process and a record store
///
/// Borrows the store; the caller owns its lifecycle.
pub struct TextBridge<'a> {
    store: &'a dyn RecordStore,
    options: BridgeOptions,
}

impl<'a> TextBridge<'a> {
    /// Create a bridge with default options
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self::with_options(store, BridgeOptions::default())
    }

    pub fn with_options(store: &'a dyn RecordStore, options: BridgeOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    /// Replace the document at `location` with `text`
    ///
    /// All lines go to the store in one overwrite. No header record is
    /// written.
    pub async fn put(&self, location: &str, text: &str) -> StorageResult<()> {
        let records = lines_to_records(text, self.options.line_ordering);
        tracing::debug!(
            location,
            records = records.len(),
            ordering = ?self.options.line_ordering,
            "putting document"
        );
        self.store
            .write_records(location, records, WriteMode::Overwrite)
            .await
    }

    /// Fetch the document at `location`
    pub async fn get(&self, location: &str) -> StorageResult<String> {
        let records = self.store.read_records(location).await?;
        tracing::debug!(location, records = records.len(), "got document records");
        records_to_text(location, records)
    }
}

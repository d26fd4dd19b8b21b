use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::store::record::{ListedRecord, Record};

/// Result of a delete call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The id does not address a current line; the file is untouched.
    OutOfRange,
    /// The store file does not exist yet (nothing to delete).
    NoStore,
}

/// The on-disk record store.
///
/// A single mutex serializes append, list and delete, so each operation is
/// atomic with respect to the others. The file is opened per call, never
/// held open; it comes into existence lazily on the first append, and its
/// absence reads as an empty store.
pub struct RecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a new line at the end of the file.
    pub async fn append(&self, record: &Record) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format!("{}\n", record.to_line()).as_bytes())
            .await?;
        file.flush().await?;

        Ok(())
    }

    /// Lists all records, assigning each its positional id.
    ///
    /// Lines that do not parse as records are skipped and do not consume an
    /// id: ids number the parseable lines only.
    pub async fn list(&self) -> Result<Vec<ListedRecord>> {
        let _guard = self.lock.lock().await;

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in contents.lines() {
            if let Some(record) = Record::from_line(line) {
                records.push(ListedRecord::new(records.len(), record));
            }
        }

        Ok(records)
    }

    /// Removes the line at position `id` and rewrites the file.
    ///
    /// Delete addresses raw lines, parseable or not, so its positions can
    /// differ from listing ids when the file holds malformed lines.
    pub async fn delete(&self, id: usize) -> Result<DeleteOutcome> {
        let _guard = self.lock.lock().await;

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DeleteOutcome::NoStore),
            Err(e) => return Err(e.into()),
        };

        let mut lines: Vec<&str> = contents.lines().collect();
        if id >= lines.len() {
            return Ok(DeleteOutcome::OutOfRange);
        }

        lines.remove(id);

        let mut remaining = lines.join("\n");
        if !remaining.is_empty() {
            remaining.push('\n');
        }
        fs::write(&self.path, remaining).await?;

        Ok(DeleteOutcome::Deleted)
    }
}

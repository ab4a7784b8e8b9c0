//! Word-list repositories.
//!
//! The checker only ever needs two things from storage: every line at once,
//! and appending one more line. Reference lists, the user list and the
//! history log all fit that shape.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::vocabulary::parse_word_list;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{0} is read-only")]
    ReadOnly(String),
}

/// Load-all / append-one storage for one-entry-per-line lists.
pub trait WordStore: Send + Sync {
    /// Every non-blank entry, trimmed, in stored order.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Append a single entry. Existing entries are never rewritten.
    fn append(&self, entry: &str) -> Result<(), StoreError>;

    /// Where this store lives, for messages.
    fn describe(&self) -> String;
}

/// A UTF-8 text file, one entry per line.
#[derive(Debug, Clone)]
pub struct FileWordStore {
    path: PathBuf,
}

impl FileWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file empty if it is missing. Existing content is untouched.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(|_| ())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

impl WordStore for FileWordStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_word_list(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                path: self.path.clone(),
            }),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn append(&self, entry: &str) -> Result<(), StoreError> {
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{entry}")
        };
        write().map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory list, for tests and embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    entries: Mutex<Vec<String>>,
    read_only: bool,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(Into::into).collect()),
            read_only: false,
        }
    }

    /// Rejects every append, to exercise write-failure paths.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Raw entries as appended, including any the loader would skip.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WordStore for MemoryWordStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.lock();
        Ok(entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect())
    }

    fn append(&self, entry: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly(self.describe()));
        }
        self.lock().push(entry.to_owned());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_append_then_load() {
        let store = MemoryWordStore::with_entries(["كتاب", "  "]);
        store.append("جديد").unwrap();
        assert_eq!(store.load().unwrap(), vec!["كتاب", "جديد"]);
        assert_eq!(store.entries().len(), 3);
    }

    #[test]
    fn test_read_only_store_rejects_append() {
        let store = MemoryWordStore::new().read_only();
        assert!(matches!(store.append("x"), Err(StoreError::ReadOnly(_))));
        assert!(store.load().unwrap().is_empty());
    }
}

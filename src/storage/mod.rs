//! Key-value persistence module.
//!
//! This module abstracts the small amount of state that survives restarts
//! (the search term) behind the `KeyValueStore` trait, with a YAML file
//! backend for the application and an in-memory backend for tests.

mod error;

pub use error::StorageError;

use log::*;
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Storage key of the persisted search term.
///
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// Read and write access to persisted text values.
///
pub trait KeyValueStore {
    /// Return the value stored under the key, if any.
    ///
    fn read(&self, key: &str) -> Option<String>;

    /// Persist the value under the key.
    ///
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Volatile store backed by a map.
///
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Return the number of writes performed so far.
    ///
    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Store backed by a YAML map on disk. The file is read once when opened
/// and rewritten on every write.
///
#[derive(Debug)]
pub struct FileStore {
    file_path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the given file path. A missing file is an empty
    /// store; it is created on the first write.
    ///
    pub fn open(file_path: &Path) -> Result<FileStore, StorageError> {
        let values = if file_path.exists() {
            let contents =
                fs::read_to_string(file_path).map_err(|e| StorageError::LoadFailed {
                    path: file_path.to_path_buf(),
                    source: e,
                })?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&contents)
                    .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?
            }
        } else {
            BTreeMap::new()
        };
        debug!(
            "Opened storage at {} with {} entries.",
            file_path.display(),
            values.len()
        );
        Ok(FileStore {
            file_path: file_path.to_path_buf(),
            values,
        })
    }

    /// Open the store at the given file path, starting empty if the file
    /// cannot be read or parsed. The broken file is replaced on the next
    /// write.
    ///
    pub fn open_or_empty(file_path: &Path) -> FileStore {
        FileStore::open(file_path).unwrap_or_else(|e| {
            warn!("Ignoring unreadable storage: {}", e);
            FileStore {
                file_path: file_path.to_path_buf(),
                values: BTreeMap::new(),
            }
        })
    }

    fn save(&self) -> Result<(), StorageError> {
        let content = serde_yaml::to_string(&self.values)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let save_failed = |e| StorageError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(save_failed)?;
            }
        }

        let mut file = fs::File::create(&self.file_path).map_err(save_failed)?;
        write!(file, "{}", content).map_err(save_failed)?;
        file.flush().map_err(save_failed)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.save()
    }
}

/// Holds the active search term, initialized from the store and written
/// back on every change.
///
pub struct QueryStore<S: KeyValueStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> QueryStore<S> {
    /// Read the value for the key, using the fallback when nothing (or an
    /// empty value) was stored. Opening never writes.
    ///
    pub fn open(store: S, key: &str, fallback: &str) -> Self {
        let value = store
            .read(key)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        debug!("Initialized '{}' to '{}'.", key, value);
        QueryStore {
            store,
            key: key.to_owned(),
            value,
        }
    }

    /// Return the current value.
    ///
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Change the value and persist it. Returns whether the value changed.
    /// Persistence is best effort: failures are logged and otherwise ignored.
    ///
    pub fn set(&mut self, value: &str) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value.to_owned();
        if let Err(e) = self.store.write(&self.key, &self.value) {
            warn!("Failed to persist '{}': {}", self.key, e);
        }
        true
    }

    /// Return the underlying store.
    ///
    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

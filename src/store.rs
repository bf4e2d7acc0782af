//! Persistence gateway
//!
//! A tiny key-value store with one file per key under the state directory.
//! Access failures never reach the caller: reads become `None`, writes
//! become no-ops, and both leave a warning in the log. In-memory state is
//! the source of truth for the running session.

use std::fs;
use std::path::PathBuf;

use crate::log;

/// Key holding the selected cat id (plain string).
pub const KEY_SELECTED: &str = "selectedCat";

/// Key holding the JSON-serialized override catalog.
pub const KEY_CATS: &str = "cats";

/// Key-value store the widget persists through.
pub trait KvStore {
    /// Read the value stored under `key`, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are swallowed and logged.
    fn write(&mut self, key: &str, value: &str);
}

/// File-backed store rooted at the state directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn(&format!(
                "Failed to create state dir {}: {}",
                dir.display(),
                e
            ));
        }
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn(&format!("Failed to read '{}': {}", key, e));
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path(key), value) {
            log::warn(&format!("Failed to write '{}': {}", key, e));
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.write(key, value);
        store
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

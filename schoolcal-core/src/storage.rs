//! Key/value storage backing the event store.
//!
//! Mirrors the browser's local storage: string keys mapping to string
//! documents, read and written whole.

use crate::error::{CalendarError, CalendarResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    /// Write to a temporary sibling, then rename over the target.
    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CalendarError::Storage(format!("Could not create {}: {e}", self.dir.display()))
        })?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));

        std::fs::write(&tmp, value)
            .map_err(|e| CalendarError::Storage(format!("Could not write {}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            CalendarError::Storage(format!("Could not replace {}: {e}", path.display()))
        })?;

        Ok(())
    }
}

/// In-memory storage, used for tests and previews.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write, like a browser with storage disabled.
    pub fn read_only() -> Self {
        MemoryStorage {
            items: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()> {
        if self.read_only {
            return Err(CalendarError::Storage("storage is read-only".into()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DRAFT_KEY: &str = "draft";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data directory available for local storage")]
    NoDataDir,
    #[error("couldn't access local storage: {0}")]
    Io(#[from] io::Error),
    #[error("local storage is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value storage persisted to a single JSON file. Every write
/// goes straight to disk.
pub struct LocalStorage {
    path: PathBuf,
    items: HashMap<String, String>,
}

impl LocalStorage {
    /// Storage under the user's data directory, e.g.
    /// `~/.local/share/quill/storage.json` on Linux.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs_next::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::open(dir.join("quill").join("storage.json"))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, items })
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Write an item to disk. The in-memory copy only changes once the
    /// write succeeds.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)?;
        self.items = items;
        Ok(())
    }

    fn persist(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_survive_reopening() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = LocalStorage::open(&path)?;
        assert_eq!(storage.get_item(DRAFT_KEY), None);
        storage.set_item(DRAFT_KEY, "# Title\n\nbody")?;
        storage.set_item(THEME_KEY, "dark")?;

        let mut storage = LocalStorage::open(&path)?;
        assert_eq!(storage.get_item(DRAFT_KEY), Some("# Title\n\nbody"));
        assert_eq!(storage.get_item(THEME_KEY), Some("dark"));

        storage.set_item(THEME_KEY, "light")?;
        let storage = LocalStorage::open(&path)?;
        assert_eq!(storage.get_item(THEME_KEY), Some("light"));
        Ok(())
    }

    #[test]
    fn failed_writes_leave_items_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut storage = LocalStorage::open(dir.path().join("blocked").join("storage.json"))?;

        // A file where the storage directory should be makes every write fail.
        fs::write(dir.path().join("blocked"), "")?;
        assert!(matches!(
            storage.set_item(DRAFT_KEY, "lost?"),
            Err(StorageError::Io(_))
        ));
        assert_eq!(storage.get_item(DRAFT_KEY), None);
        Ok(())
    }

    #[test]
    fn corrupt_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json")?;
        assert!(matches!(
            LocalStorage::open(&path),
            Err(StorageError::Json(_))
        ));
        Ok(())
    }
}

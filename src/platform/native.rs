//! Native storage: a flat JSON object on disk

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::Storage;

/// File-backed key-value store, rewritten on every `set_item`
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store. A corrupt file is logged and
    /// treated as empty; it is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Store {} is corrupt ({}), starting empty", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        log::info!("Opened store {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            log::warn!("Failed to write store {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("brick-breaker-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("breakoutBestScore"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let _ = std::fs::remove_file(&path);

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item("breakoutBestScore", "17");

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("breakoutBestScore").as_deref(), Some("17"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("breakoutBestScore"), None);

        let _ = std::fs::remove_file(&path);
    }
}

//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, a JSON file natively)
//! - User notifications (blocking alert on web, the log natively)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::HashMap;

/// String key-value store holding persisted game data
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write failures are logged by the implementation, never surfaced
    fn set_item(&mut self, key: &str, value: &str);
}

/// Blocking user-visible message (round end)
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// In-memory store (tests and throwaway runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items, writes: 0 }
    }

    /// Number of `set_item` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Notifier that keeps every message (tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_counts_writes() {
        let mut storage = MemoryStorage::with_item("a", "1");
        assert_eq!(storage.get_item("a").as_deref(), Some("1"));
        assert_eq!(storage.get_item("b"), None);
        assert_eq!(storage.write_count(), 0);

        storage.set_item("b", "2");
        assert_eq!(storage.get_item("b").as_deref(), Some("2"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_recording_notifier() {
        let mut notifier = RecordingNotifier::default();
        notifier.notify("GAME OVER");
        assert_eq!(notifier.messages, vec!["GAME OVER".to_string()]);
    }
}

//! Best score persistence
//!
//! Stored as a decimal string under a single key so it stays readable from
//! browser devtools.

use crate::platform::Storage;

/// Highest score seen across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "breakoutBestScore";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Load the best score; missing or unreadable entries count as 0
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(raw) = storage.get_item(Self::STORAGE_KEY) else {
            log::info!("No best score found, starting fresh");
            return Self::default();
        };

        match raw.trim().parse::<u32>() {
            Ok(value) => {
                log::info!("Loaded best score {}", value);
                Self { value }
            }
            Err(_) => {
                log::warn!("Ignoring unreadable best score {:?}", raw);
                Self::default()
            }
        }
    }

    /// Take `score` as the new best if it beats the current one
    /// Returns true if the best score changed
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        true
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        storage.set_item(Self::STORAGE_KEY, &self.value.to_string());
        log::info!("Best score saved ({})", self.value);
    }
}

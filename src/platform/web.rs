//! Browser storage and notifications

use super::{Notifier, Storage};

/// `window.localStorage`
///
/// Falls back to an unavailable store (reads miss, writes are dropped) when
/// the browser denies storage access.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("LocalStorage unavailable, best score will not persist");
        }
        Self { inner }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.inner {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage rejected write to {}", key);
            }
        }
    }
}

/// `window.alert`, which blocks the page until dismissed
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

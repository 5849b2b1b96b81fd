//! Address bar boundary
//!
//! The navigator reads the current path once on startup and records the
//! canonical URL on every successful commit. Externally triggered path
//! changes (user pressing back, manual edits) enter through
//! `Navigator::handle_address_change`.

use parking_lot::RwLock;

pub trait AddressBar: Send + Sync {
    /// Current path
    fn current(&self) -> String;

    /// Record the canonical URL of a committed navigation
    fn record(&self, url: &str);
}

/// In-memory address bar for tests and headless hosts.
pub struct MemoryAddressBar {
    path: RwLock<String>,
}

impl MemoryAddressBar {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: RwLock::new(initial.into()),
        }
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryAddressBar {
    fn current(&self) -> String {
        self.path.read().clone()
    }

    fn record(&self, url: &str) {
        *self.path.write() = url.to_string();
    }
}

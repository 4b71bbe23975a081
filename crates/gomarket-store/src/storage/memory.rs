//! In-memory storage backend.
//!
//! The testing counterpart to [`super::file::FileStorage`]: same contract,
//! no disk. Also useful for ephemeral "guest" sessions where the cart
//! should not survive a restart.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CartStorage, StorageResult};

/// HashMap-backed key-value storage.
///
/// The map sits behind a std `Mutex`; no lock is held across an await
/// point, so the blocking is momentary.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory storage pre-seeded with entries.
    ///
    /// ## Usage
    /// Seeding the cart key lets tests exercise the load path without a
    /// prior write-through.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        MemoryStorage {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

#[async_trait]
impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

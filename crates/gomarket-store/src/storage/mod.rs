//! # Storage Layer
//!
//! The key-value seam between the cart store and the device.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartStorage Contract                               │
//! │                                                                         │
//! │  get(key)  → Ok(Some(value))   value previously written under key      │
//! │            → Ok(None)          nothing stored under key                 │
//! │            → Err(Read)         backend failure                          │
//! │                                                                         │
//! │  set(key, value) → Ok(())      full value replaced atomically from     │
//! │                                the store's point of view                │
//! │                  → Err(Write)  backend failure                          │
//! │                                                                         │
//! │  Values are opaque strings; the store owns the JSON encoding.          │
//! │  No partial writes, no deltas, no versioning.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backends
//!
//! - [`file::FileStorage`] - one file per key in the app data directory
//! - [`memory::MemoryStorage`] - HashMap-backed, for tests

pub mod file;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

/// The well-known key holding the serialized cart.
///
/// The full item sequence lives under this single key; every write-through
/// replaces the whole value.
pub const CART_STORAGE_KEY: &str = "@GoMarket:cartproducts";

/// Key-value backend failures.
///
/// These carry backend context as strings in the message; callers do not
/// branch on the cause, only on read vs write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing a key failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Data directory permissions changed underneath the app
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Asynchronous string key-value storage.
///
/// Implementations must be cheap to share behind an `Arc` and safe to call
/// from concurrent tasks. The cart store serializes its own writes, so
/// backends do not need write ordering of their own.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;
}

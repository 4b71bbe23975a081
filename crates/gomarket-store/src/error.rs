//! # Store Error Types
//!
//! The error taxonomy handle consumers see.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (StorageError)      Mutation failure (CoreError)      │
//! │       │                                   │                             │
//! │       └───────────────┬───────────────────┘                             │
//! │                       ▼                                                 │
//! │  StoreError (this module) ← adds corruption + lifetime variants        │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  UI error boundary (host application)                                  │
//! │                                                                         │
//! │  No retries, no local recovery: every failure surfaces upward.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use gomarket_core::CoreError;

use crate::storage::StorageError;

/// Errors surfaced by the cart store and its handles.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart mutation precondition was violated.
    ///
    /// ## When This Occurs
    /// - increment/decrement named an id not in the cart
    #[error(transparent)]
    Cart(#[from] CoreError),

    /// The underlying key-value backend failed.
    ///
    /// ## When This Occurs
    /// - Storage read rejected during load
    /// - Storage write rejected during write-through
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored cart payload could not be deserialized.
    ///
    /// ## When This Occurs
    /// - The value under the cart key was written by something else
    /// - The payload was truncated or hand-edited
    ///
    /// This is fatal to the load: the store performs no repair and keeps
    /// its in-memory state as it was.
    #[error("corrupt cart payload under '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// A handle was used outside an active provider scope.
    ///
    /// ## When This Occurs
    /// - The `CartProvider` was dropped while a component still holds a
    ///   `CartHandle`
    ///
    /// This fails fast and loud rather than returning an empty cart.
    #[error("cart accessed outside an active provider scope")]
    ContextUnavailable,
}

impl StoreError {
    /// Creates a Corrupt error for the given storage key.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for gomarket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gomarket-core errors (this file)                                      │
//! │  └── CoreError        - Cart mutation failures                         │
//! │                                                                         │
//! │  gomarket-store errors (separate crate)                                │
//! │  ├── StorageError     - Key-value backend failures                     │
//! │  └── StoreError       - What handle consumers see                      │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → UI error boundary                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart mutation errors.
///
/// These errors represent violations of the cart's preconditions.
/// Any failing mutation leaves the cart exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Increment or decrement named an id that is not in the cart.
    ///
    /// ## When This Occurs
    /// - A quantity stepper fires for an item removed on another screen
    /// - The UI holds a stale snapshot and references a gone entry
    #[error("cart item not found: {id}")]
    ItemNotFound { id: String },
}

impl CoreError {
    /// Creates an ItemNotFound error for the given item id.
    pub fn item_not_found(id: impl Into<String>) -> Self {
        CoreError::ItemNotFound { id: id.into() }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

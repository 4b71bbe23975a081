//! # gomarket-store: Shared Cart State for GoMarket
//!
//! This crate provides the shared, persisted cart state container for the
//! GoMarket storefront. It wraps the pure cart logic from `gomarket-core`
//! with asynchronous key-value persistence and a provider/handle layer for
//! sharing one cart instance across many UI components.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GoMarket Cart Data Flow                            │
//! │                                                                         │
//! │  UI component (product list, cart screen, ...)                         │
//! │       │                                                                 │
//! │       │ CartHandle (cloneable, weak)                                   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  gomarket-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CartProvider  │    │   CartStore   │    │ CartStorage  │  │   │
//! │  │   │ (context.rs)  │───►│  (store.rs)   │───►│ (storage/)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ owns store    │    │ Cart + mutex  │    │ FileStorage  │  │   │
//! │  │   │ hands out     │    │ write-through │    │ MemoryStorage│  │   │
//! │  │   │ weak handles  │    │ on mutation   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  On-device key-value storage                                           │
//! │  "@GoMarket:cartproducts" → JSON array of cart items                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `CartStorage` trait and its backends
//! - [`store`] - The `CartStore` state container
//! - [`context`] - Provider/handle layer for sharing one store
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gomarket_core::Product;
//! use gomarket_store::{CartProvider, FileStorage};
//!
//! # async fn demo() -> Result<(), gomarket_store::StoreError> {
//! // Mount once at app startup; the stored cart is loaded before this returns
//! let storage = Arc::new(FileStorage::in_app_data()?);
//! let provider = CartProvider::mount(storage).await?;
//!
//! // Hand cheap clones of the handle to whichever components need the cart
//! let cart = provider.handle();
//! cart.add_to_cart(Product {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.gomarket.app/shirt.png".into(),
//!     price: 10.0,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod error;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use context::{CartHandle, CartProvider};
pub use error::{StoreError, StoreResult};
pub use storage::file::FileStorage;
pub use storage::memory::MemoryStorage;
pub use storage::{CartStorage, StorageError, CART_STORAGE_KEY};
pub use store::CartStore;

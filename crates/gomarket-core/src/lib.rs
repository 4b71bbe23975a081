//! # gomarket-core: Pure Cart Logic for GoMarket
//!
//! This crate is the **heart** of the GoMarket cart. It contains the cart
//! collection and its mutations as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     GoMarket Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (mobile frontend)                 │   │
//! │  │    Product List ──► Cart Screen ──► Quantity Steppers          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartHandle                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              gomarket-store (state container)                   │   │
//! │  │    CartStore ── write-through ──► key-value storage             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ gomarket-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   cart    │  │   error   │                  │   │
//! │  │   │  Product  │  │   Cart    │  │ CoreError │                  │   │
//! │  │   │  CartItem │  │ mutations │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart line item types (`Product`, `CartItem`)
//! - [`cart`] - The ordered cart collection and its mutations
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every mutation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Opaque Price**: `price` is carried, never computed on
//! 4. **Explicit Errors**: A missing id is a typed error, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use gomarket_core::{Cart, Product};
//!
//! let mut cart = Cart::new();
//! cart.add(Product {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.gomarket.app/shirt.png".into(),
//!     price: 10.0,
//! });
//!
//! // Adding the same id again bumps the quantity instead of duplicating
//! cart.add(Product {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.gomarket.app/shirt.png".into(),
//!     price: 10.0,
//! });
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.items()[0].quantity, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gomarket_core::Cart` instead of
// `use gomarket_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use types::{CartItem, Product};

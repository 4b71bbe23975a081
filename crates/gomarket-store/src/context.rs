//! # Provider / Handle Layer
//!
//! Shares one [`CartStore`] across many UI components without threading
//! the store itself through every constructor.
//!
//! ## Lifetime Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Provider / Handle Lifetimes                          │
//! │                                                                         │
//! │  App startup                                                            │
//! │  ───────────                                                            │
//! │  CartProvider::mount(storage).await  ← loads the persisted cart        │
//! │       │                                before returning                 │
//! │       │ owns Arc<CartStore>                                             │
//! │       ▼                                                                 │
//! │  provider.handle() ──► CartHandle ──► clone ──► clone ──► ...          │
//! │                        (Weak reference per handle)                      │
//! │                                                                         │
//! │  While the provider is alive:   every handle call reaches the store    │
//! │  After the provider is dropped: every handle call fails with           │
//! │                                 StoreError::ContextUnavailable         │
//! │                                                                         │
//! │  Failing loud beats silently handing out an empty cart.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Weak};

use tracing::info;

use gomarket_core::{CartItem, Product};

use crate::error::{StoreError, StoreResult};
use crate::storage::CartStorage;
use crate::store::CartStore;

/// Owns the shared cart store for the lifetime of the app session.
///
/// Mount exactly one provider at startup and keep it alive for as long as
/// the cart should be reachable. Dropping the provider invalidates every
/// outstanding [`CartHandle`].
#[derive(Debug)]
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Creates the store and loads the persisted cart before returning.
    ///
    /// Handles obtained afterwards never observe the pre-load window: by
    /// the time `mount` resolves, the in-memory cart already reflects
    /// whatever storage held.
    ///
    /// ## Errors
    /// - `StoreError::Storage` if the initial read fails
    /// - `StoreError::Corrupt` if the stored payload does not deserialize
    pub async fn mount(storage: Arc<dyn CartStorage>) -> StoreResult<Self> {
        let store = Arc::new(CartStore::new(storage));
        store.load().await?;

        info!("cart provider mounted");
        Ok(CartProvider { store })
    }

    /// Returns a cheap, cloneable handle to the shared cart.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

/// A consumer-side reference to the shared cart.
///
/// Clone freely and pass to whichever components need the cart. All
/// clones observe the same state. A handle never keeps the store alive:
/// once the provider unmounts, calls fail with
/// [`StoreError::ContextUnavailable`].
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Weak<CartStore>,
}

impl CartHandle {
    /// Upgrades to the store, or fails if the provider is gone.
    fn store(&self) -> StoreResult<Arc<CartStore>> {
        self.store.upgrade().ok_or(StoreError::ContextUnavailable)
    }

    /// Snapshot of the current items, in insertion order.
    pub async fn products(&self) -> StoreResult<Vec<CartItem>> {
        Ok(self.store()?.products().await)
    }

    /// Adds a product to the cart. See [`CartStore::add_to_cart`].
    pub async fn add_to_cart(&self, product: Product) -> StoreResult<Vec<CartItem>> {
        self.store()?.add_to_cart(product).await
    }

    /// Increments an item's quantity by 1. See [`CartStore::increment`].
    pub async fn increment(&self, id: &str) -> StoreResult<Vec<CartItem>> {
        self.store()?.increment(id).await
    }

    /// Decrements an item's quantity by 1, removing it at quantity 1.
    /// See [`CartStore::decrement`].
    pub async fn decrement(&self, id: &str) -> StoreResult<Vec<CartItem>> {
        self.store()?.decrement(id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::CART_STORAGE_KEY;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.gomarket.app/{}.png", id),
            price: 10.0,
        }
    }

    #[tokio::test]
    async fn test_handles_share_one_cart() {
        let provider = CartProvider::mount(Arc::new(MemoryStorage::new()))
            .await
            .unwrap();

        let checkout = provider.handle();
        let product_list = provider.handle();

        product_list.add_to_cart(product("a")).await.unwrap();
        product_list.add_to_cart(product("a")).await.unwrap();

        let seen = checkout.products().await.unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_mount_loads_persisted_cart() {
        let storage = Arc::new(MemoryStorage::with_entries([(
            CART_STORAGE_KEY.to_string(),
            r#"[{"id":"a","title":"Shirt","image_url":"u","price":10.0,"quantity":2}]"#
                .to_string(),
        )]));

        let provider = CartProvider::mount(storage).await.unwrap();

        let items = provider.handle().products().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_mount_fails_on_corrupt_payload() {
        let storage = Arc::new(MemoryStorage::with_entries([(
            CART_STORAGE_KEY.to_string(),
            "{broken".to_string(),
        )]));

        let err = CartProvider::mount(storage).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_handle_outliving_provider_fails_loud() {
        let provider = CartProvider::mount(Arc::new(MemoryStorage::new()))
            .await
            .unwrap();
        let handle = provider.handle();
        handle.add_to_cart(product("a")).await.unwrap();

        drop(provider);

        let err = handle.products().await.unwrap_err();
        assert!(matches!(err, StoreError::ContextUnavailable));

        let err = handle.add_to_cart(product("b")).await.unwrap_err();
        assert!(matches!(err, StoreError::ContextUnavailable));
    }
}

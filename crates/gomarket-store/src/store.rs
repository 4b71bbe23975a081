//! # Cart Store
//!
//! The shared cart state container: in-memory cart plus write-through
//! persistence.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  load() ──► storage.get(KEY) ──► None      → keep empty cart           │
//! │                              └─► Some(raw) → deserialize, replace      │
//! │                                              (parse failure is fatal)   │
//! │                                                                         │
//! │  Every mutation                                                         │
//! │  ──────────────                                                         │
//! │  add_to_cart / increment / decrement                                    │
//! │       │                                                                 │
//! │       ├─ 1. apply the core mutation (may fail, state untouched)        │
//! │       ├─ 2. serialize the FULL item sequence                           │
//! │       └─ 3. storage.set(KEY, json)  ← full-value overwrite             │
//! │                                                                         │
//! │  NOTE: The cart lock is held across step 3, so mutations and their     │
//! │        persisted writes land in order (single-writer discipline).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use gomarket_core::{Cart, CartItem, Product};

use crate::error::{StoreError, StoreResult};
use crate::storage::{CartStorage, CART_STORAGE_KEY};

/// The shared cart state container.
///
/// ## Concurrency
/// The cart sits behind an async `Mutex`. Each operation takes the lock,
/// applies the in-memory mutation, and keeps holding the lock through the
/// storage write. Concurrent callers therefore observe a strict order:
/// every persisted value reflects exactly the mutation history up to that
/// write, never a stale interleaving.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    cart: Mutex<Cart>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The storage backend is a trait object without a Debug bound
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl CartStore {
    /// Creates an empty cart store bound to a storage backend.
    ///
    /// The store starts empty; call [`load`](Self::load) to rehydrate the
    /// previously persisted cart.
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        CartStore {
            storage,
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Loads the persisted cart, replacing the in-memory state.
    ///
    /// ## Behavior
    /// - Nothing stored under the cart key: the cart stays empty
    /// - A stored value exists: it replaces the in-memory state wholesale
    ///
    /// ## Errors
    /// - `StoreError::Storage` if the backend read fails
    /// - `StoreError::Corrupt` if the stored value does not deserialize;
    ///   the in-memory state is left as it was
    pub async fn load(&self) -> StoreResult<()> {
        let raw = self.storage.get(CART_STORAGE_KEY).await?;

        let Some(raw) = raw else {
            debug!("no persisted cart, starting empty");
            return Ok(());
        };

        let items: Vec<CartItem> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::corrupt(CART_STORAGE_KEY, e.to_string()))?;

        info!(items = items.len(), "loaded persisted cart");
        self.cart.lock().await.replace(items);
        Ok(())
    }

    /// Returns a snapshot of the current items, in insertion order.
    pub async fn products(&self) -> Vec<CartItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Adds a product to the cart and persists the result.
    ///
    /// ## Behavior
    /// - Id already in cart: quantity bumps by 1; the stored
    ///   title/image_url/price stay frozen at their first-add values
    /// - Id not in cart: appended at the end with quantity 1
    ///
    /// ## Returns
    /// The updated item sequence.
    pub async fn add_to_cart(&self, product: Product) -> StoreResult<Vec<CartItem>> {
        debug!(id = %product.id, "add_to_cart");

        let mut cart = self.cart.lock().await;
        cart.add(product);
        self.persist(&cart).await?;
        Ok(cart.items().to_vec())
    }

    /// Increments the quantity of an existing item and persists the result.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` (as `StoreError::Cart`) if the id is not
    /// in the cart; neither the cart nor storage is touched.
    pub async fn increment(&self, id: &str) -> StoreResult<Vec<CartItem>> {
        debug!(id = %id, "increment");

        let mut cart = self.cart.lock().await;
        cart.increment(id)?;
        self.persist(&cart).await?;
        Ok(cart.items().to_vec())
    }

    /// Decrements the quantity of an existing item and persists the result.
    ///
    /// An item at quantity 1 is removed entirely.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` (as `StoreError::Cart`) if the id is not
    /// in the cart; neither the cart nor storage is touched.
    pub async fn decrement(&self, id: &str) -> StoreResult<Vec<CartItem>> {
        debug!(id = %id, "decrement");

        let mut cart = self.cart.lock().await;
        cart.decrement(id)?;
        self.persist(&cart).await?;
        Ok(cart.items().to_vec())
    }

    /// Writes the full item sequence under the cart key.
    ///
    /// Called with the cart lock held. The in-memory mutation has already
    /// been applied when this runs; a write failure propagates to the
    /// caller with the in-memory state kept (no rollback, no retry).
    async fn persist(&self, cart: &Cart) -> StoreResult<()> {
        let json = serde_json::to_string(cart.items())
            .map_err(|e| StoreError::corrupt(CART_STORAGE_KEY, e.to_string()))?;

        self.storage.set(CART_STORAGE_KEY, json).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::{StorageError, StorageResult};
    use async_trait::async_trait;
    use gomarket_core::CoreError;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.gomarket.app/{}.png", id),
            price,
        }
    }

    fn store() -> (Arc<MemoryStorage>, CartStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = CartStore::new(storage.clone());
        (storage, store)
    }

    /// Backend whose writes always fail, for error propagation tests.
    struct BrokenStorage;

    #[async_trait]
    impl CartStorage for BrokenStorage {
        async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: String) -> StorageResult<()> {
            Err(StorageError::Write("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_with_nothing_stored_keeps_cart_empty() {
        let (_storage, store) = store();
        store.load().await.unwrap();
        assert!(store.products().await.is_empty());
    }

    #[tokio::test]
    async fn test_every_mutation_writes_through() {
        let (storage, store) = store();

        store.add_to_cart(product("a", 10.0)).await.unwrap();
        let after_add = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        assert!(after_add.contains("\"quantity\":1"));

        store.increment("a").await.unwrap();
        let after_inc = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        assert!(after_inc.contains("\"quantity\":2"));

        store.decrement("a").await.unwrap();
        store.decrement("a").await.unwrap();
        let after_dec = storage.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(after_dec, "[]");
    }

    #[tokio::test]
    async fn test_round_trip_through_fresh_store() {
        let storage = Arc::new(MemoryStorage::new());

        let first = CartStore::new(storage.clone());
        first.add_to_cart(product("a", 10.0)).await.unwrap();
        first.add_to_cart(product("b", 20.0)).await.unwrap();
        first.add_to_cart(product("a", 10.0)).await.unwrap();
        let written = first.products().await;

        // A later app session: same backend, new store
        let second = CartStore::new(storage);
        second.load().await.unwrap();

        assert_eq!(second.products().await, written);
    }

    #[tokio::test]
    async fn test_load_replaces_in_memory_state() {
        let (storage, store) = store();
        store.add_to_cart(product("stale", 1.0)).await.unwrap();

        let persisted = serde_json::to_string(&[CartItem {
            id: "a".to_string(),
            title: "Shirt".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
            quantity: 3,
        }])
        .unwrap();
        storage
            .set(CART_STORAGE_KEY, persisted)
            .await
            .unwrap();

        store.load().await.unwrap();

        let items = store.products().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_load_with_corrupt_payload_fails() {
        let (storage, store) = store();
        storage
            .set(CART_STORAGE_KEY, "not json".to_string())
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();

        assert!(matches!(err, StoreError::Corrupt { .. }));
        // In-memory state untouched by the failed load
        assert!(store.products().await.is_empty());
    }

    #[tokio::test]
    async fn test_increment_missing_id_leaves_state_and_storage_unchanged() {
        let (storage, store) = store();
        store.add_to_cart(product("a", 10.0)).await.unwrap();
        store.add_to_cart(product("b", 20.0)).await.unwrap();
        let persisted_before = storage.get(CART_STORAGE_KEY).await.unwrap();
        let items_before = store.products().await;

        let err = store.increment("missing").await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Cart(CoreError::ItemNotFound { .. })
        ));
        assert_eq!(store.products().await, items_before);
        assert_eq!(storage.get(CART_STORAGE_KEY).await.unwrap(), persisted_before);
    }

    #[tokio::test]
    async fn test_write_failure_propagates_after_in_memory_update() {
        let store = CartStore::new(Arc::new(BrokenStorage));

        let err = store.add_to_cart(product("a", 10.0)).await.unwrap_err();

        assert!(matches!(err, StoreError::Storage(StorageError::Write(_))));
        // Matches the write-through ordering: state first, then persist
        assert_eq!(store.products().await.len(), 1);
    }

    #[tokio::test]
    async fn test_full_shirt_scenario_with_persistence() {
        let (_storage, store) = store();
        let shirt = Product {
            id: "a".to_string(),
            title: "Shirt".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
        };

        store.add_to_cart(shirt.clone()).await.unwrap();
        assert_eq!(store.products().await[0].quantity, 1);

        store.add_to_cart(shirt).await.unwrap();
        assert_eq!(store.products().await[0].quantity, 2);

        store.increment("a").await.unwrap();
        assert_eq!(store.products().await[0].quantity, 3);

        store.decrement("a").await.unwrap();
        store.decrement("a").await.unwrap();
        assert_eq!(store.products().await[0].quantity, 1);

        store.decrement("a").await.unwrap();
        assert!(store.products().await.is_empty());
    }
}

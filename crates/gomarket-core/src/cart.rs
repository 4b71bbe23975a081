//! # Cart Collection
//!
//! The ordered cart collection and its three mutations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Mutations                                    │
//! │                                                                         │
//! │  Storefront Action         Mutation              Cart Change            │
//! │  ─────────────────         ────────              ───────────            │
//! │                                                                         │
//! │  Tap product ────────────► add(product) ───────► push or qty += 1      │
//! │                                                                         │
//! │  Tap "+" stepper ────────► increment(id) ──────► items[i].qty += 1     │
//! │                                                                         │
//! │  Tap "-" stepper ────────► decrement(id) ──────► qty -= 1, or remove   │
//! │                                                  when qty would hit 0   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{CartItem, Product};

/// The shopping cart: an ordered sequence of line items, unique by id.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product bumps quantity)
/// - Every item has `quantity >= 1` (decrementing past 1 removes the item)
/// - Insertion order is preserved and is the only ordering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from an already-validated item sequence.
    ///
    /// Used when rehydrating the cart from persistent storage.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Read-only view of the current items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consumes the cart, returning the item sequence.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Replaces the entire item sequence.
    ///
    /// This is the load path: whatever storage held wins over the
    /// in-memory state wholesale.
    pub fn replace(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - If the id is already in the cart: quantity increases by 1. The
    ///   stored title/image_url/price are NOT refreshed from the input,
    ///   even if they differ (frozen at first add).
    /// - If the id is not in the cart: appended at the end with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Increments the quantity of an existing item by 1.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` if the id is not in the cart. The cart
    /// is unchanged in that case.
    pub fn increment(&mut self, id: &str) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))?;

        item.quantity += 1;
        Ok(())
    }

    /// Decrements the quantity of an existing item by 1.
    ///
    /// ## Behavior
    /// - `quantity > 1`: decrement by 1
    /// - `quantity == 1`: remove the entry entirely (never retain a
    ///   zero-quantity item)
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` if the id is not in the cart. The cart
    /// is unchanged in that case.
    pub fn decrement(&mut self, id: &str) -> CoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))?;

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }

        Ok(())
    }

    /// Returns the number of unique items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Cart Line Item Types
//!
//! The two shapes a product takes on its way into the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Type Flow                                       │
//! │                                                                         │
//! │  ┌─────────────────┐    add()     ┌─────────────────┐                  │
//! │  │    Product      │ ───────────► │    CartItem     │                  │
//! │  │  ─────────────  │              │  ─────────────  │                  │
//! │  │  id             │              │  id             │                  │
//! │  │  title          │              │  title          │                  │
//! │  │  image_url      │              │  image_url      │                  │
//! │  │  price          │              │  price          │                  │
//! │  └─────────────────┘              │  quantity (≥1)  │                  │
//! │                                   └─────────────────┘                  │
//! │                                                                         │
//! │  CartItem is exactly what gets persisted and what the UI renders.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Names Are the Wire Format
//! The persisted cart is a JSON array of `CartItem` objects with these
//! field names verbatim (`id, title, image_url, price, quantity`).
//! Renaming a field here is a breaking change for existing on-device carts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A product as the storefront hands it to the cart.
///
/// ## Identity
/// `id` is supplied by the caller and must be stable across sessions.
/// The cart never generates ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Caller-supplied unique identifier, stable across sessions.
    pub id: String,

    /// Display name shown in the cart screen.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price. Opaque to the cart: carried, never computed on.
    pub price: f64,
}

/// One cart line item: a product plus the quantity in the cart.
///
/// ## Invariant
/// `quantity >= 1`. An item whose quantity would reach zero is removed
/// from the cart instead.
///
/// ## Frozen Fields
/// `title`, `image_url` and `price` are captured when the item first
/// enters the cart. Re-adding the same id bumps `quantity` only; the
/// stored copy is NOT refreshed from the incoming product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Caller-supplied unique identifier, stable across sessions.
    pub id: String,

    /// Display name at time of adding (frozen).
    pub title: String,

    /// Display image reference at time of adding (frozen).
    pub image_url: String,

    /// Unit price at time of adding (frozen, opaque).
    pub price: f64,

    /// Quantity in cart. Always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line item from a product with an initial quantity of 1.
    pub fn from_product(product: Product) -> Self {
        CartItem {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product {
            id: "shirt-01".to_string(),
            title: "Shirt".to_string(),
            image_url: "https://cdn.gomarket.app/shirt.png".to_string(),
            price: 10.0,
        }
    }

    #[test]
    fn test_from_product_starts_at_quantity_one() {
        let item = CartItem::from_product(shirt());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, "shirt-01");
        assert_eq!(item.title, "Shirt");
    }

    #[test]
    fn test_wire_format_field_names() {
        let item = CartItem::from_product(shirt());
        let json = serde_json::to_value(&item).unwrap();

        // The persisted payload depends on these exact names
        assert!(json.get("id").is_some());
        assert!(json.get("title").is_some());
        assert!(json.get("image_url").is_some());
        assert!(json.get("price").is_some());
        assert!(json.get("quantity").is_some());
    }
}

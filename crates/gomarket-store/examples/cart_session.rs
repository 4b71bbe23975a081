//! End-to-end cart session: mount, mutate, remount, observe persistence.
//!
//! ```text
//! GOMARKET_DATA_DIR=/tmp/gomarket cargo run --example cart_session
//! RUST_LOG=debug cargo run --example cart_session
//! ```

use std::sync::Arc;

use gomarket_core::Product;
use gomarket_store::{CartProvider, FileStorage, StoreError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn shirt() -> Product {
    Product {
        id: "shirt-01".to_string(),
        title: "Plain Shirt".to_string(),
        image_url: "https://cdn.gomarket.app/shirt-01.png".to_string(),
        price: 10.0,
    }
}

fn mug() -> Product {
    Product {
        id: "mug-07".to_string(),
        title: "Enamel Mug".to_string(),
        image_url: "https://cdn.gomarket.app/mug-07.png".to_string(),
        price: 14.5,
    }
}

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    // Default: INFO, override with RUST_LOG
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gomarket_store=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let storage = Arc::new(FileStorage::in_app_data()?);
    info!(root = %storage.root().display(), "using file storage");

    // First "app session"
    {
        let provider = CartProvider::mount(storage.clone()).await?;
        let cart = provider.handle();

        cart.add_to_cart(shirt()).await?;
        cart.add_to_cart(shirt()).await?;
        cart.add_to_cart(mug()).await?;
        cart.decrement("mug-07").await?;

        for item in cart.products().await? {
            println!("{:>3} x {} ({})", item.quantity, item.title, item.id);
        }
    }

    // Second "app session": a fresh mount sees the persisted cart
    let provider = CartProvider::mount(storage).await?;
    let items = provider.handle().products().await?;
    println!("after remount: {} unique item(s)", items.len());

    Ok(())
}

// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset

use shop_api::models::{Cart, CartId, Item};
use shop_api::store::Shop;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A shop holding one item per `(name, price)` pair, created in order.
pub fn shop_with_items(items: &[(&str, f64)]) -> (Shop, Vec<Item>) {
  let shop = Shop::new();
  let created = items.iter().map(|(name, price)| shop.create_item(*name, *price)).collect();
  (shop, created)
}

/// Creates a cart and adds each item id to it, in order.
pub fn cart_with(shop: &Shop, item_ids: &[u64]) -> Cart {
  let cart = shop.create_cart();
  let mut last = cart;
  for item_id in item_ids {
    last = shop
      .add_item_to_cart(last.id, *item_id)
      .expect("test items and cart exist");
  }
  last
}

pub fn ids_of_carts(carts: &[Cart]) -> Vec<CartId> {
  carts.iter().map(|c| c.id).collect()
}

pub fn ids_of_items(items: &[Item]) -> Vec<u64> {
  items.iter().map(|i| i.id).collect()
}

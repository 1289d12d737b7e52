// shop_api/src/store/shop.rs

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{instrument, trace};

use super::carts::{CartQuery, CartStore};
use super::error::StoreResult;
use super::items::{ItemPatch, ItemQuery, ItemStore};
use crate::models::{Cart, CartId, Item, ItemId};

#[derive(Debug, Default)]
struct ShopData {
  items: ItemStore,
  carts: CartStore,
}

/// Process-wide handle to both stores.
///
/// Cloning is cheap and every clone sees the same data. Reads take a shared
/// lock, every mutation takes the exclusive lock for its whole
/// read-modify-write, so id allocation and cart totals never race. Guards
/// are released before returning and MUST NOT be held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct Shop(Arc<RwLock<ShopData>>);

impl Shop {
  pub fn new() -> Self {
    Self::default()
  }

  // --- Items ---

  #[instrument(level = "trace", skip(self, name))]
  pub fn create_item(&self, name: impl Into<String>, price: f64) -> Item {
    self.0.write().items.create(name, price)
  }

  /// Returns the item even when it is soft-deleted.
  pub fn get_item(&self, id: ItemId) -> Option<Item> {
    self.0.read().items.get(id).cloned()
  }

  pub fn list_items(&self, query: &ItemQuery) -> Option<Vec<Item>> {
    let listed = self.0.read().items.list(query);
    trace!(?query, found = listed.as_ref().map(Vec::len), "Listed items.");
    listed
  }

  pub fn update_item(&self, id: ItemId, name: impl Into<String>, price: f64) -> Option<Item> {
    self.0.write().items.update(id, name, price)
  }

  pub fn patch_item(&self, id: ItemId, patch: ItemPatch) -> Option<Item> {
    self.0.write().items.patch(id, patch)
  }

  pub fn delete_item(&self, id: ItemId) -> Option<Item> {
    self.0.write().items.delete(id)
  }

  // --- Carts ---

  pub fn create_cart(&self) -> Cart {
    self.0.write().carts.create()
  }

  pub fn get_cart(&self, id: CartId) -> Option<Cart> {
    self.0.read().carts.get(id).cloned()
  }

  pub fn list_carts(&self, query: &CartQuery) -> Option<Vec<Cart>> {
    let listed = self.0.read().carts.list(query);
    trace!(?query, found = listed.as_ref().map(Vec::len), "Listed carts.");
    listed
  }

  #[instrument(level = "trace", skip(self))]
  pub fn add_item_to_cart(&self, cart_id: CartId, item_id: ItemId) -> StoreResult<Cart> {
    let mut guard = self.0.write();
    let ShopData { items, carts } = &mut *guard;
    carts.add_item(cart_id, item_id, items)
  }
}

// shop_api/src/store/items.rs

//! Item Store: product records with soft delete.

use std::collections::BTreeMap;

use tracing::debug;

use super::id_gen::IdGenerator;
use super::paginate;
use crate::models::{Item, ItemId};

/// Filters and window for [`ItemStore::list`].
///
/// A price bound of exactly `0.0` counts as "not provided", same as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuery {
  pub offset: usize,
  pub limit: usize,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub show_deleted: bool,
}

impl Default for ItemQuery {
  fn default() -> Self {
    Self {
      offset: 0,
      limit: 5,
      min_price: None,
      max_price: None,
      show_deleted: false,
    }
  }
}

/// Partial update for [`ItemStore::patch`]. An empty name or a `0.0` price
/// leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
  pub name: Option<String>,
  pub price: Option<f64>,
}

#[derive(Debug, Default)]
pub struct ItemStore {
  items: BTreeMap<ItemId, Item>,
  ids: IdGenerator,
}

fn provided_price(bound: Option<f64>) -> Option<f64> {
  bound.filter(|price| *price != 0.0)
}

impl ItemStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn create(&mut self, name: impl Into<String>, price: f64) -> Item {
    let item = Item::new(self.ids.next_id(), name, price);
    debug!(item_id = item.id, "Item created.");
    self.items.insert(item.id, item.clone());
    item
  }

  /// Returns the record whether or not it has been deleted.
  pub fn get(&self, id: ItemId) -> Option<&Item> {
    self.items.get(&id)
  }

  /// `None` only when the store holds no items at all. A non-empty store
  /// whose filters exclude everything yields `Some(vec![])`.
  pub fn list(&self, query: &ItemQuery) -> Option<Vec<Item>> {
    if self.items.is_empty() {
      return None;
    }

    let min_price = provided_price(query.min_price);
    let max_price = provided_price(query.max_price);

    let matching = self
      .items
      .values()
      .filter(|item| min_price.map_or(true, |min| item.price >= min))
      .filter(|item| max_price.map_or(true, |max| item.price <= max))
      .filter(|item| query.show_deleted || !item.deleted);

    Some(paginate(matching, query.offset, query.limit))
  }

  /// Replaces name and price. Deleted items cannot be updated.
  pub fn update(&mut self, id: ItemId, name: impl Into<String>, price: f64) -> Option<Item> {
    let item = self.live_mut(id)?;
    item.name = name.into();
    item.price = price;
    debug!(item_id = id, "Item replaced.");
    Some(item.clone())
  }

  pub fn patch(&mut self, id: ItemId, patch: ItemPatch) -> Option<Item> {
    let item = self.live_mut(id)?;
    if let Some(name) = patch.name.filter(|name| !name.is_empty()) {
      item.name = name;
    }
    if let Some(price) = provided_price(patch.price) {
      item.price = price;
    }
    debug!(item_id = id, "Item patched.");
    Some(item.clone())
  }

  /// Soft delete. Repeating it is harmless and returns the item again.
  pub fn delete(&mut self, id: ItemId) -> Option<Item> {
    let item = self.items.get_mut(&id)?;
    item.deleted = true;
    debug!(item_id = id, "Item marked deleted.");
    Some(item.clone())
  }

  fn live_mut(&mut self, id: ItemId) -> Option<&mut Item> {
    self.items.get_mut(&id).filter(|item| !item.deleted)
  }
}

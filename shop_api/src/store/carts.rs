// shop_api/src/store/carts.rs

//! Cart Store. Depends on the Item Store to resolve what gets added.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::id_gen::IdGenerator;
use super::items::ItemStore;
use super::paginate;
use crate::models::{Cart, CartId, CartItem, ItemId};

/// Filters and window for [`CartStore::list`]. Every bound that is `Some`
/// is applied, zero included.
#[derive(Debug, Clone, PartialEq)]
pub struct CartQuery {
  pub offset: usize,
  pub limit: usize,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub min_quantity: Option<u64>,
  pub max_quantity: Option<u64>,
}

impl Default for CartQuery {
  fn default() -> Self {
    Self {
      offset: 0,
      limit: 10,
      min_price: None,
      max_price: None,
      min_quantity: None,
      max_quantity: None,
    }
  }
}

impl CartQuery {
  fn matches(&self, cart: &Cart) -> bool {
    let quantity = cart.total_quantity();
    self.min_price.map_or(true, |min| cart.price >= min)
      && self.max_price.map_or(true, |max| cart.price <= max)
      && self.min_quantity.map_or(true, |min| quantity >= min)
      && self.max_quantity.map_or(true, |max| quantity <= max)
  }
}

#[derive(Debug, Default)]
pub struct CartStore {
  carts: BTreeMap<CartId, Cart>,
  ids: IdGenerator,
}

impl CartStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.carts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.is_empty()
  }

  pub fn create(&mut self) -> Cart {
    let cart = Cart::empty(self.ids.next_id());
    debug!(cart_id = cart.id, "Cart created.");
    self.carts.insert(cart.id, cart.clone());
    cart
  }

  pub fn get(&self, id: CartId) -> Option<&Cart> {
    self.carts.get(&id)
  }

  /// `None` only when no cart exists at all.
  pub fn list(&self, query: &CartQuery) -> Option<Vec<Cart>> {
    if self.carts.is_empty() {
      return None;
    }
    let matching = self.carts.values().filter(|cart| query.matches(cart));
    Some(paginate(matching, query.offset, query.limit))
  }

  /// Adds one unit of `item_id` to the cart and charges the item's current
  /// price. The cart is resolved before the item, so a request naming two
  /// unknown ids reports the cart.
  pub fn add_item(&mut self, cart_id: CartId, item_id: ItemId, items: &ItemStore) -> StoreResult<Cart> {
    let cart = self.carts.get_mut(&cart_id).ok_or(StoreError::CartNotFound(cart_id))?;
    let item = items.get(item_id).ok_or(StoreError::ItemNotFound(item_id))?;

    match cart.items.iter_mut().find(|line| line.id == item_id) {
      Some(line) => line.quantity += 1,
      None => cart.items.push(CartItem::first_of(item)),
    }
    cart.price += item.price;

    debug!(cart_id, item_id, cart_price = cart.price, "Item added to cart.");
    Ok(cart.clone())
  }
}

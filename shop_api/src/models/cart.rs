// shop_api/src/models/cart.rs

use serde::{Deserialize, Serialize};

use super::cart_item::CartItem;

pub type CartId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
  pub id: CartId,
  /// Line items in the order they were first added.
  pub items: Vec<CartItem>,
  /// Running total: the sum of the item price at the time of each add.
  pub price: f64,
}

impl Cart {
  pub fn empty(id: CartId) -> Self {
    Self {
      id,
      items: Vec::new(),
      price: 0.0,
    }
  }

  /// Sum of `quantity` over every line item.
  pub fn total_quantity(&self) -> u64 {
    self.items.iter().map(|line| line.quantity).sum()
  }
}

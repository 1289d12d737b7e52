// shop_api/src/models/cart_item.rs

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

/// One line of a cart. `name` is a snapshot taken when the item was first
/// added and is not kept in sync with later item edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub id: ItemId,
  pub name: String,
  pub quantity: u64,
  pub available: bool,
}

impl CartItem {
  pub fn first_of(item: &Item) -> Self {
    Self {
      id: item.id,
      name: item.name.clone(),
      quantity: 1,
      available: true,
    }
  }
}

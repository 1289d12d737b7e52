// shop_api/src/models/item.rs

use serde::{Deserialize, Serialize};

pub type ItemId = u64;

/// A product record. Items are never physically removed; `delete` only
/// raises the `deleted` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id: ItemId,
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub deleted: bool,
}

impl Item {
  pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
    Self {
      id,
      name: name.into(),
      price,
      deleted: false,
    }
  }
}

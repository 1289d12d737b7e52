// shop_api/src/store/error.rs

use thiserror::Error;

use crate::models::{CartId, ItemId};

/// Failures reported by store operations that cannot express absence with
/// a plain `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("Cart with ID {0} not found.")]
  CartNotFound(CartId),

  #[error("Item with ID {0} not found.")]
  ItemNotFound(ItemId),
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

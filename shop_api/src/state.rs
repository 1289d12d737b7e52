// shop_api/src/state.rs
use crate::store::Shop;

/// Shared with every handler through `web::Data`.
#[derive(Clone, Default)]
pub struct AppState {
  pub shop: Shop,
}

impl AppState {
  pub fn new(shop: Shop) -> Self {
    Self { shop }
  }
}

// shop_api/src/web/handlers/cart_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::{ensure_non_negative, ensure_positive};
use crate::errors::{AppError, Result};
use crate::models::{CartId, ItemId};
use crate::state::AppState;
use crate::store::CartQuery;

fn default_cart_limit() -> usize {
  CartQuery::default().limit
}

// Quantity bounds are unsigned, so negative values already fail extraction.
#[derive(Deserialize, Debug)]
pub struct ListCartsQuery {
  #[serde(default)]
  pub offset: usize,
  #[serde(default = "default_cart_limit")]
  pub limit: usize,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub min_quantity: Option<u64>,
  pub max_quantity: Option<u64>,
}

impl TryFrom<ListCartsQuery> for CartQuery {
  type Error = AppError;

  fn try_from(q: ListCartsQuery) -> Result<Self> {
    ensure_positive("limit", q.limit)?;
    ensure_non_negative("min_price", q.min_price)?;
    ensure_non_negative("max_price", q.max_price)?;
    Ok(CartQuery {
      offset: q.offset,
      limit: q.limit,
      min_price: q.min_price,
      max_price: q.max_price,
      min_quantity: q.min_quantity,
      max_quantity: q.max_quantity,
    })
  }
}

#[instrument(name = "handler::create_cart", skip(app_state))]
pub async fn create_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let cart = app_state.shop.create_cart();
  info!("Cart {} created.", cart.id);

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/cart/{}", cart.id)))
      .json(cart),
  )
}

#[instrument(name = "handler::get_cart", skip(app_state, path), fields(cart_id = %path.as_ref()))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, path: web::Path<CartId>) -> Result<HttpResponse> {
  let cart_id = path.into_inner();

  let cart = app_state.shop.get_cart(cart_id).ok_or_else(|| {
    warn!("Cart {} not found.", cart_id);
    AppError::NotFound(format!("Cart with ID {} not found.", cart_id))
  })?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::list_carts", skip(app_state))]
pub async fn list_carts_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListCartsQuery>,
) -> Result<HttpResponse> {
  let query = CartQuery::try_from(query_params.into_inner())?;

  let carts = app_state
    .shop
    .list_carts(&query)
    .ok_or_else(|| AppError::NotFound("Carts not found.".to_string()))?;

  info!("Listed {} carts.", carts.len());
  Ok(HttpResponse::Ok().json(carts))
}

#[instrument(
    name = "handler::add_item_to_cart",
    skip(app_state, path),
    fields(cart_id = %path.0, item_id = %path.1)
)]
pub async fn add_item_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(CartId, ItemId)>,
) -> Result<HttpResponse> {
  let (cart_id, item_id) = path.into_inner();

  match app_state.shop.add_item_to_cart(cart_id, item_id) {
    Ok(cart) => {
      info!(
        "Item {} added to cart {}. Lines: {}, price: {}",
        item_id,
        cart_id,
        cart.items.len(),
        cart.price
      );
      Ok(HttpResponse::Created().json(cart))
    }
    Err(store_err) => {
      warn!("Add to cart failed: {}", store_err);
      Err(store_err.into())
    }
  }
}

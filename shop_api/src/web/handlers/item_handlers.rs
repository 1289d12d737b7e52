// shop_api/src/web/handlers/item_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::{ensure_non_negative, ensure_positive};
use crate::errors::{AppError, Result};
use crate::models::ItemId;
use crate::state::AppState;
use crate::store::{ItemPatch, ItemQuery};

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct ItemRequestPayload {
  pub name: String,
  pub price: f64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ItemPatchPayload {
  pub name: Option<String>,
  pub price: Option<f64>,
}

fn default_item_limit() -> usize {
  ItemQuery::default().limit
}

#[derive(Deserialize, Debug)]
pub struct ListItemsQuery {
  #[serde(default)]
  pub offset: usize,
  #[serde(default = "default_item_limit")]
  pub limit: usize,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  #[serde(default)]
  pub show_deleted: bool,
}

impl TryFrom<ListItemsQuery> for ItemQuery {
  type Error = AppError;

  fn try_from(q: ListItemsQuery) -> Result<Self> {
    ensure_positive("limit", q.limit)?;
    ensure_non_negative("min_price", q.min_price)?;
    ensure_non_negative("max_price", q.max_price)?;
    Ok(ItemQuery {
      offset: q.offset,
      limit: q.limit,
      min_price: q.min_price,
      max_price: q.max_price,
      show_deleted: q.show_deleted,
    })
  }
}

fn item_not_found(id: ItemId) -> AppError {
  AppError::NotFound(format!("Item with ID {} not found.", id))
}

// --- Handler Implementations ---

#[instrument(name = "handler::create_item", skip(app_state, req_payload), fields(name = %req_payload.name))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ItemRequestPayload>,
) -> Result<HttpResponse> {
  let ItemRequestPayload { name, price } = req_payload.into_inner();
  let item = app_state.shop.create_item(name, price);
  info!("Item {} created with price {}.", item.id, item.price);

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/item/{}", item.id)))
      .json(item),
  )
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(app_state: web::Data<AppState>, path: web::Path<ItemId>) -> Result<HttpResponse> {
  let item_id = path.into_inner();

  match app_state.shop.get_item(item_id) {
    Some(item) if !item.deleted => Ok(HttpResponse::Ok().json(item)),
    _ => {
      warn!("Item {} not found or deleted.", item_id);
      Err(item_not_found(item_id))
    }
  }
}

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListItemsQuery>,
) -> Result<HttpResponse> {
  let query = ItemQuery::try_from(query_params.into_inner())?;

  let items = app_state
    .shop
    .list_items(&query)
    .ok_or_else(|| AppError::NotFound("Items not found.".to_string()))?;

  info!("Listed {} items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::update_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn update_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ItemId>,
  req_payload: web::Json<ItemRequestPayload>,
) -> Result<HttpResponse> {
  let item_id = path.into_inner();
  let ItemRequestPayload { name, price } = req_payload.into_inner();

  let item = app_state.shop.update_item(item_id, name, price).ok_or_else(|| {
    warn!("Update rejected: item {} is unknown or deleted.", item_id);
    item_not_found(item_id)
  })?;

  info!("Item {} replaced.", item_id);
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::patch_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn patch_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ItemId>,
  req_payload: web::Json<ItemPatchPayload>,
) -> Result<HttpResponse> {
  let item_id = path.into_inner();
  let ItemPatchPayload { name, price } = req_payload.into_inner();

  if let Some(item) = app_state.shop.patch_item(item_id, ItemPatch { name, price }) {
    info!("Item {} patched.", item_id);
    return Ok(HttpResponse::Ok().json(item));
  }

  // Items are never removed, so a record that exists here was deleted.
  match app_state.shop.get_item(item_id) {
    Some(_) => {
      warn!("Patch rejected: item {} is deleted.", item_id);
      Err(AppError::NotModified(format!("Item with ID {} is deleted.", item_id)))
    }
    None => Err(item_not_found(item_id)),
  }
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn delete_item_handler(app_state: web::Data<AppState>, path: web::Path<ItemId>) -> Result<HttpResponse> {
  let item_id = path.into_inner();

  let item = app_state.shop.delete_item(item_id).ok_or_else(|| item_not_found(item_id))?;
  info!("Item {} marked deleted.", item_id);
  Ok(HttpResponse::Ok().json(item))
}

// shop_api/src/web/routes.rs

use actix_web::{error, web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, item_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed paths, queries and bodies all surface as 422 with the usual
/// `{"error": ...}` shape instead of actix's plain-text 400.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid JSON body: {}", err)))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid query parameters: {}", err)))
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
      error::Error::from(AppError::Validation(format!("Invalid path parameter: {}", err)))
    }));
}

/// Registers every route of the shop API on the given Actix config.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  extractor_configs(cfg);

  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/item")
        .service(
          web::resource(["", "/"])
            .route(web::get().to(item_handlers::list_items_handler))
            .route(web::post().to(item_handlers::create_item_handler)),
        )
        .service(
          web::resource("/{id}")
            .route(web::get().to(item_handlers::get_item_handler))
            .route(web::put().to(item_handlers::update_item_handler))
            .route(web::patch().to(item_handlers::patch_item_handler))
            .route(web::delete().to(item_handlers::delete_item_handler)),
        ),
    )
    .service(
      web::scope("/cart")
        .service(
          web::resource(["", "/"])
            .route(web::get().to(cart_handlers::list_carts_handler))
            .route(web::post().to(cart_handlers::create_cart_handler)),
        )
        .route("/{cart_id}", web::get().to(cart_handlers::get_cart_handler))
        .route(
          "/{cart_id}/add/{item_id}",
          web::post().to(cart_handlers::add_item_to_cart_handler),
        ),
    );
}

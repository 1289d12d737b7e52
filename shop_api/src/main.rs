// shop_api/src/main.rs

use actix_web::{web, App, HttpServer};
use shop_api::config::AppConfig;
use shop_api::state::AppState;
use shop_api::store::Shop;
use shop_api::{telemetry, web as shop_web};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
  let app_config = AppConfig::from_env().map_err(|e| {
    // The subscriber is not installed yet, so this goes straight to stderr.
    eprintln!("Configuration error: {}", e);
    io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
  })?;

  telemetry::init_tracing(app_config.log_format);
  tracing::info!("Starting shop API server...");

  // One store for the lifetime of the process, shared by every worker.
  let app_state = AppState::new(Shop::new());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let mut server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(shop_web::configure_app_routes)
  });
  if let Some(workers) = app_config.server_workers {
    server = server.workers(workers);
  }

  server.bind(&server_address)?.run().await
}

// shop_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Actix worker count; `None` keeps the framework default (one per core).
  pub server_workers: Option<usize>,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = lookup("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let server_workers = match lookup("SERVER_WORKERS") {
      None => None,
      Some(raw) => match raw.parse::<usize>() {
        Ok(0) => return Err(AppError::Config("SERVER_WORKERS must be at least 1".to_string())),
        Ok(n) => Some(n),
        Err(e) => return Err(AppError::Config(format!("Invalid SERVER_WORKERS: {}", e))),
      },
    };

    let log_format = match lookup("LOG_FORMAT").as_deref() {
      None | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => {
        return Err(AppError::Config(format!(
          "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
          other
        )))
      }
    };

    Ok(Self {
      server_host,
      server_port,
      server_workers,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

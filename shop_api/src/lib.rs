// shop_api/src/lib.rs

//! A small shop HTTP API: items and carts kept in process memory.
//!
//! The [`store`] module holds the data and its query rules; [`web`] maps
//! HTTP requests onto it.

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use errors::{AppError, Result};

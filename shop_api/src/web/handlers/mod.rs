// shop_api/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod item_handlers;

use crate::errors::{AppError, Result};

pub(crate) fn ensure_positive(field: &str, value: usize) -> Result<()> {
  if value == 0 {
    return Err(AppError::Validation(format!("{} must be greater than 0", field)));
  }
  Ok(())
}

/// Rejects negative and NaN bounds. `None` passes.
pub(crate) fn ensure_non_negative(field: &str, value: Option<f64>) -> Result<()> {
  match value {
    Some(v) if v.is_nan() || v < 0.0 => Err(AppError::Validation(format!(
      "{} must be greater than or equal to 0",
      field
    ))),
    _ => Ok(()),
  }
}

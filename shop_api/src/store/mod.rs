// shop_api/src/store/mod.rs

//! In-memory item and cart stores.
//!
//! [`ItemStore`] and [`CartStore`] are plain single-owner structures; all
//! sharing goes through [`Shop`], which serializes access behind one lock.

pub mod carts;
pub mod error;
pub mod id_gen;
pub mod items;
pub mod shop;

pub use carts::{CartQuery, CartStore};
pub use error::{StoreError, StoreResult};
pub use id_gen::IdGenerator;
pub use items::{ItemPatch, ItemQuery, ItemStore};
pub use shop::Shop;

/// Takes the `[offset, offset + limit)` window of `records`, truncated at
/// the end and empty when `offset` runs past it.
pub(crate) fn paginate<'a, T, I>(records: I, offset: usize, limit: usize) -> Vec<T>
where
  T: Clone + 'a,
  I: Iterator<Item = &'a T>,
{
  records.skip(offset).take(limit).cloned().collect()
}

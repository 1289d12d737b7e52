// shop_api/src/models/mod.rs

//! Records held by the in-memory store and returned over HTTP.

pub mod cart;
pub mod cart_item;
pub mod item;

pub use cart::{Cart, CartId};
pub use cart_item::CartItem;
pub use item::{Item, ItemId};

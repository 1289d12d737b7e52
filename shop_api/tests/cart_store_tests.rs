// tests/cart_store_tests.rs
mod common;

use common::*;
use shop_api::models::CartItem;
use shop_api::store::{CartQuery, CartStore, ItemStore, Shop, StoreError};
use std::thread;

#[test]
fn test_new_carts_are_empty_with_sequential_ids() {
  setup_tracing();
  let mut carts = CartStore::new();
  let first = carts.create();
  let second = carts.create();

  assert_eq!((first.id, second.id), (0, 1));
  assert!(first.items.is_empty());
  assert_eq!(first.price, 0.0);
  assert_eq!(carts.get(1), Some(&second));
  assert!(carts.get(2).is_none());
}

#[test]
fn test_adding_items_accumulates_lines_quantity_and_price() {
  setup_tracing();
  let (shop, items) = shop_with_items(&[("A", 10.0), ("B", 20.0)]);
  let (a, b) = (&items[0], &items[1]);

  let cart = cart_with(&shop, &[a.id, b.id, a.id]);

  assert_eq!(
    cart.items,
    vec![
      CartItem {
        id: a.id,
        name: "A".to_string(),
        quantity: 2,
        available: true
      },
      CartItem {
        id: b.id,
        name: "B".to_string(),
        quantity: 1,
        available: true
      },
    ]
  );
  assert_eq!(cart.price, 40.0);
  assert_eq!(cart.total_quantity(), 3);
  assert_eq!(shop.get_cart(cart.id), Some(cart));
}

#[test]
fn test_cart_price_is_not_recomputed_after_item_changes() {
  setup_tracing();
  let (shop, items) = shop_with_items(&[("A", 10.0)]);
  let item_id = items[0].id;

  let cart = cart_with(&shop, &[item_id]);
  shop.update_item(item_id, "A renamed", 50.0).unwrap();
  assert_eq!(shop.get_cart(cart.id).unwrap().price, 10.0);

  // The next add charges the new price; the line keeps its first name.
  let cart = shop.add_item_to_cart(cart.id, item_id).unwrap();
  assert_eq!(cart.price, 60.0);
  assert_eq!(cart.items[0].name, "A");
  assert_eq!(cart.items[0].quantity, 2);
}

#[test]
fn test_add_item_reports_missing_cart_before_missing_item() {
  setup_tracing();
  let mut items = ItemStore::new();
  let mut carts = CartStore::new();
  let item = items.create("A", 1.0);
  let cart = carts.create();

  assert_eq!(carts.add_item(9, item.id, &items), Err(StoreError::CartNotFound(9)));
  assert_eq!(carts.add_item(9, 9, &items), Err(StoreError::CartNotFound(9)));
  assert_eq!(carts.add_item(cart.id, 9, &items), Err(StoreError::ItemNotFound(9)));
  assert!(carts.get(cart.id).unwrap().items.is_empty());
}

#[test]
fn test_soft_deleted_items_can_still_be_added() {
  setup_tracing();
  let (shop, items) = shop_with_items(&[("A", 3.0)]);
  shop.delete_item(items[0].id);

  let cart = cart_with(&shop, &[items[0].id]);
  assert_eq!(cart.price, 3.0);
  assert!(cart.items[0].available);
}

#[test]
fn test_list_filters_on_price_and_total_quantity() {
  setup_tracing();
  let (shop, items) = shop_with_items(&[("A", 10.0), ("B", 5.0)]);
  let (a, b) = (items[0].id, items[1].id);

  let empty = shop.create_cart(); // price 0, qty 0
  let one_a = cart_with(&shop, &[a]); // price 10, qty 1
  let mixed = cart_with(&shop, &[a, b, b]); // price 20, qty 3

  let all = shop.list_carts(&CartQuery::default()).unwrap();
  assert_eq!(ids_of_carts(&all), vec![empty.id, one_a.id, mixed.id]);

  let pricey = shop
    .list_carts(&CartQuery {
      min_price: Some(10.0),
      ..CartQuery::default()
    })
    .unwrap();
  assert_eq!(ids_of_carts(&pricey), vec![one_a.id, mixed.id]);

  // Zero is an active bound for carts.
  let zero_max_qty = shop
    .list_carts(&CartQuery {
      max_quantity: Some(0),
      ..CartQuery::default()
    })
    .unwrap();
  assert_eq!(ids_of_carts(&zero_max_qty), vec![empty.id]);

  let windowed = shop
    .list_carts(&CartQuery {
      offset: 1,
      limit: 1,
      min_quantity: Some(1),
      max_quantity: Some(3),
      ..CartQuery::default()
    })
    .unwrap();
  assert_eq!(ids_of_carts(&windowed), vec![mixed.id]);

  let nothing = shop.list_carts(&CartQuery {
    min_price: Some(1000.0),
    ..CartQuery::default()
  });
  assert_eq!(nothing, Some(vec![]));
}

#[test]
fn test_list_on_empty_store_is_none() {
  setup_tracing();
  let shop = Shop::new();
  assert!(shop.list_carts(&CartQuery::default()).is_none());
}

#[test]
fn test_concurrent_adds_on_one_cart_lose_no_updates() {
  setup_tracing();
  let (shop, items) = shop_with_items(&[("A", 1.5)]);
  let item_id = items[0].id;
  let cart_id = shop.create_cart().id;

  let workers: Vec<_> = (0..8)
    .map(|_| {
      let shop = shop.clone();
      thread::spawn(move || {
        for _ in 0..50 {
          shop.add_item_to_cart(cart_id, item_id).unwrap();
          shop.create_item("filler", 1.0);
        }
      })
    })
    .collect();
  for worker in workers {
    worker.join().unwrap();
  }

  let cart = shop.get_cart(cart_id).unwrap();
  assert_eq!(cart.items.len(), 1);
  assert_eq!(cart.items[0].quantity, 400);
  assert_eq!(cart.price, 600.0);

  // Every concurrent create got its own id.
  let listed = shop
    .list_items(&shop_api::store::ItemQuery {
      limit: 1000,
      ..Default::default()
    })
    .unwrap();
  let mut ids: Vec<u64> = ids_of_items(&listed);
  ids.dedup();
  assert_eq!(ids, (0..401).collect::<Vec<u64>>());
}

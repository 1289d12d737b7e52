// shop_api/src/store/id_gen.rs

/// Monotonic id counter. Starts at 0 and never hands out the same id twice.
/// Callers serialize access through the store lock.
#[derive(Debug, Default)]
pub struct IdGenerator {
  next: u64,
}

impl IdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn next_id(&mut self) -> u64 {
    let id = self.next;
    self.next += 1;
    id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_start_at_zero_and_increase_by_one() {
    let mut ids = IdGenerator::new();
    let issued: Vec<u64> = (0..5).map(|_| ids.next_id()).collect();
    assert_eq!(issued, vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn independent_generators_do_not_share_state() {
    let mut carts = IdGenerator::new();
    let mut items = IdGenerator::new();
    assert_eq!(carts.next_id(), 0);
    assert_eq!(carts.next_id(), 1);
    assert_eq!(items.next_id(), 0);
  }
}

// food_ordering/src/view_model/state.rs

//! State owned by the ordering view-model. The presentation layer reads it; only the
//! view-model writes it.

use crate::models::{CartLine, CatalogItem, Coordinate, Session};

#[derive(Debug, Clone, Default)]
pub struct OrderingState {
  pub coordinate: Option<Coordinate>,
  pub address: String,
  pub no_location: bool,
  pub search: String,
  /// The full catalog; the only place item attributes live.
  pub items: Vec<CatalogItem>,
  /// Query the filtered projection is currently computed with. Lags `search` until
  /// `apply_filter` runs, and is reset by a catalog fetch.
  pub applied_filter: String,
  pub cart: Vec<CartLine>,
  pub ordered: bool,
  pub show_menu: bool,
  pub session: Option<Session>,
}

impl OrderingState {
  /// Items matching `applied_filter`, in catalog order.
  pub fn filtered(&self) -> Vec<CatalogItem> {
    self
      .items
      .iter()
      .filter(|item| item.matches(&self.applied_filter))
      .cloned()
      .collect()
  }

  pub fn item_index(&self, id: &str) -> Option<usize> {
    self.items.iter().position(|item| item.id == id)
  }

  pub fn cart_index(&self, item_id: &str) -> Option<usize> {
    self.cart.iter().position(|line| line.item.id == item_id)
  }

  /// True when the ids flagged `added` are exactly the ids in the cart.
  pub fn cart_consistent(&self) -> bool {
    let mut added: Vec<&str> = self.items.iter().filter(|i| i.added).map(|i| i.id.as_str()).collect();
    let mut in_cart: Vec<&str> = self.cart.iter().map(|l| l.item.id.as_str()).collect();
    added.sort_unstable();
    in_cart.sort_unstable();
    added == in_cart
  }
}

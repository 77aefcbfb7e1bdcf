// food_ordering/src/view_model/cart.rs

use crate::error::{OrderingError, OrderingResult};
use crate::models::CartLine;
use crate::view_model::pricing::cart_total;
use crate::view_model::OrderingViewModel;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartToggle {
  Added,
  Removed,
}

impl OrderingViewModel {
  /// Adds the item with quantity 1, or removes its line if it is already in the cart.
  ///
  /// An id that is not in the catalog changes nothing and returns `ItemNotFound`.
  pub fn toggle_cart_line(&self, item_id: &str) -> OrderingResult<CartToggle> {
    let outcome: OrderingResult<CartToggle> = self.state.update(|s| {
      let idx = s.item_index(item_id).ok_or_else(|| OrderingError::ItemNotFound {
        id: item_id.to_string(),
      })?;

      let item = &mut s.items[idx];
      if item.added {
        item.added = false;
        if let Some(line_idx) = s.cart_index(item_id) {
          s.cart.remove(line_idx);
        }
        Ok(CartToggle::Removed)
      } else {
        let line = CartLine::new(item.clone());
        item.added = true;
        s.cart.push(line);
        Ok(CartToggle::Added)
      }
    });

    match &outcome {
      Ok(toggle) => debug!(%item_id, ?toggle, "Cart line toggled."),
      Err(e) => warn!(%item_id, error = %e, "Cart toggle ignored."),
    }
    outcome
  }

  /// Unformatted cart total.
  pub fn total_amount(&self) -> f64 {
    cart_total(&self.state.read().cart)
  }

  /// Cart total formatted in the configured currency.
  pub fn compute_total(&self) -> String {
    self.prices.format(self.total_amount())
  }
}

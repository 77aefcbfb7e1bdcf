// food_ordering/src/view_model/order.rs

use crate::error::{OrderingError, OrderingResult};
use crate::models::OrderDocument;
use crate::view_model::pricing::cart_total;
use crate::view_model::OrderingViewModel;
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
  /// The session's order document was written.
  Placed,
  /// The session's order document was deleted.
  Cancelled,
}

impl OrderingViewModel {
  /// Places the cart as an order, or cancels the outstanding one.
  ///
  /// `ordered` flips before the write is issued and flips back if the write fails,
  /// in which case the write error is returned. Without a session (or, when placing,
  /// without a location fix) nothing changes.
  #[instrument(name = "OrderingViewModel::submit_or_get_order", skip(self), err(Display))]
  pub async fn submit_or_get_order(&self) -> OrderingResult<OrderOutcome> {
    let (session, ordered, cart, coordinate) = {
      let s = self.state.read();
      (s.session.clone(), s.ordered, s.cart.clone(), s.coordinate)
    };
    let session = session.ok_or(OrderingError::NoSession)?;
    let collection = self.config.users_collection.as_str();

    if ordered {
      self.state.update(|s| s.ordered = false);
      if let Err(e) = self.services.store.delete(collection, &session.uid).await {
        error!(error = %e, uid = %session.uid, "Order cancellation failed; order kept.");
        self.state.update(|s| s.ordered = true);
        return Err(e);
      }
      info!(uid = %session.uid, "Order cancelled.");
      return Ok(OrderOutcome::Cancelled);
    }

    let coordinate = coordinate.ok_or(OrderingError::NoLocationFix)?;
    let document = OrderDocument::new(&cart, self.prices.format(cart_total(&cart)), coordinate);
    let fields = document.to_fields()?;

    self.state.update(|s| s.ordered = true);
    if let Err(e) = self.services.store.upsert(collection, &session.uid, fields).await {
      error!(error = %e, uid = %session.uid, "Order submission failed; order withdrawn.");
      self.state.update(|s| s.ordered = false);
      return Err(e);
    }
    info!(
      uid = %session.uid,
      lines = document.ordered_food.len(),
      total = %document.total_cost,
      "Order placed."
    );
    Ok(OrderOutcome::Placed)
  }
}

// food_ordering/src/models/cart_line.rs

use crate::models::item::CatalogItem;
use serde::Serialize;
use uuid::Uuid;

/// A cart entry. Holds a value copy of the item, not a live link into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
  pub id: String,
  pub item: CatalogItem,
  pub quantity: u32,
}

impl CartLine {
  pub fn new(item: CatalogItem) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      item,
      quantity: 1,
    }
  }

  pub fn subtotal(&self) -> f64 {
    f64::from(self.quantity) * self.item.cost
  }
}

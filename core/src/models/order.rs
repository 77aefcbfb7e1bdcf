// food_ordering/src/models/order.rs

use crate::error::{OrderingError, OrderingResult};
use crate::models::cart_line::CartLine;
use crate::models::location::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  pub item_name: String,
  pub item_quantity: u32,
  pub item_cost: f64,
}

impl From<&CartLine> for OrderLine {
  fn from(line: &CartLine) -> Self {
    Self {
      item_name: line.item.name.clone(),
      item_quantity: line.quantity,
      item_cost: line.item.cost,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
  pub latitude: f64,
  pub longitude: f64,
}

impl From<Coordinate> for GeoPoint {
  fn from(c: Coordinate) -> Self {
    Self {
      latitude: c.latitude,
      longitude: c.longitude,
    }
  }
}

/// Body of the `Users/{uid}` document written when an order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
  pub ordered_food: Vec<OrderLine>,
  /// Formatted currency string, display only.
  pub total_cost: String,
  pub location: GeoPoint,
}

impl OrderDocument {
  pub fn new(cart: &[CartLine], total_cost: String, location: Coordinate) -> Self {
    Self {
      ordered_food: cart.iter().map(OrderLine::from).collect(),
      total_cost,
      location: location.into(),
    }
  }

  pub fn to_fields(&self) -> OrderingResult<serde_json::Map<String, serde_json::Value>> {
    match serde_json::to_value(self).map_err(OrderingError::Encode)? {
      serde_json::Value::Object(fields) => Ok(fields),
      // A struct always serializes to an object.
      other => Err(OrderingError::Encode(serde::ser::Error::custom(format!(
        "expected an object, got {}",
        other
      )))),
    }
  }
}

// food_ordering/src/models/item.rs

use crate::error::{OrderingError, OrderingResult};
use crate::services::Document;
use serde::{Deserialize, Serialize};

/// One purchasable menu entry. Only `added` changes after the catalog is fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
  pub id: String,
  pub name: String,
  pub cost: f64,
  pub details: String,
  pub image: String,
  pub ratings: String,
  pub added: bool,
}

// Field layout of an `Items` document.
#[derive(Debug, Deserialize)]
struct ItemFields {
  item_name: String,
  item_cost: f64,
  item_details: String,
  item_image: String,
  item_ratings: String,
}

impl CatalogItem {
  pub fn new(id: impl Into<String>, name: impl Into<String>, cost: f64) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      cost,
      details: String::new(),
      image: String::new(),
      ratings: String::new(),
      added: false,
    }
  }

  /// Maps a store document onto an item. Any missing or mistyped field rejects the document.
  pub fn from_document(doc: &Document) -> OrderingResult<Self> {
    let fields: ItemFields = serde_json::from_value(serde_json::Value::Object(doc.fields.clone())).map_err(|source| {
      OrderingError::MalformedDocument {
        key: doc.key.clone(),
        source,
      }
    })?;

    Ok(Self {
      id: doc.key.clone(),
      name: fields.item_name,
      cost: fields.item_cost,
      details: fields.item_details,
      image: fields.item_image,
      ratings: fields.item_ratings,
      added: false,
    })
  }

  /// Inverse of `from_document`, used to seed stores.
  pub fn to_fields(&self) -> serde_json::Map<String, serde_json::Value> {
    let mut fields = serde_json::Map::new();
    fields.insert("item_name".into(), self.name.clone().into());
    fields.insert("item_cost".into(), self.cost.into());
    fields.insert("item_details".into(), self.details.clone().into());
    fields.insert("item_image".into(), self.image.clone().into());
    fields.insert("item_ratings".into(), self.ratings.clone().into());
    fields
  }

  /// Case-insensitive substring match on the display name. An empty query matches everything.
  pub fn matches(&self, query: &str) -> bool {
    query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
  }
}

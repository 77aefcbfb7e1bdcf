// ordering_app/src/menu.rs

//! Seed catalog for the in-memory document store, in the same field layout the
//! remote `Items` collection uses.

use anyhow::{Context, Result};
use food_ordering::Document;

const MENU_JSON: &str = r#"{
  "burger":  { "item_name": "Burger",  "item_cost": 10.0, "item_ratings": "5", "item_image": "burger",  "item_details": "Beef patty, cheddar, pickles" },
  "pizza":   { "item_name": "Pizza",   "item_cost": 5.5,  "item_ratings": "4", "item_image": "pizza",   "item_details": "Margherita slice" },
  "burrito": { "item_name": "Burrito", "item_cost": 7.25, "item_ratings": "4", "item_image": "burrito", "item_details": "Rice, beans, salsa verde" },
  "ramen":   { "item_name": "Ramen",   "item_cost": 12.0, "item_ratings": "5", "item_image": "ramen",   "item_details": "Tonkotsu broth, chashu" },
  "salad":   { "item_name": "Salad",   "item_cost": 6.75, "item_ratings": "3", "item_image": "salad",   "item_details": "Greens, feta, lemon dressing" }
}"#;

pub fn seed_documents() -> Result<Vec<Document>> {
  let menu: serde_json::Map<String, serde_json::Value> =
    serde_json::from_str(MENU_JSON).context("Embedded menu is not valid JSON")?;

  menu
    .into_iter()
    .map(|(key, value)| match value {
      serde_json::Value::Object(fields) => Ok(Document::new(key, fields)),
      _ => anyhow::bail!("Menu entry '{}' is not an object", key),
    })
    .collect()
}

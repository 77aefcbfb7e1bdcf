// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use food_ordering::{
  CatalogItem, Coordinate, MemoryDocumentStore, MockIdentityProvider, MockLocationProvider, OrderingConfig,
  OrderingViewModel, Placemark, Services,
};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::Level;

// --- Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Catalog Fixtures ---
pub fn item(id: &str, name: &str, cost: f64) -> CatalogItem {
  CatalogItem {
    id: id.to_string(),
    name: name.to_string(),
    cost,
    details: format!("{} details", name),
    image: format!("https://img.example.com/{}.png", id),
    ratings: "4".to_string(),
    added: false,
  }
}

pub fn sample_items() -> Vec<CatalogItem> {
  vec![
    item("burger", "Burger", 10.0),
    item("pizza", "Pizza", 5.5),
    item("burrito", "Burrito", 7.25),
  ]
}

pub fn home() -> Coordinate {
  Coordinate::new(-6.2, 106.8)
}

pub fn home_placemark() -> Placemark {
  Placemark {
    name: Some("Main St".to_string()),
    locality: Some("Springfield".to_string()),
  }
}

// --- View-model Harness ---
pub struct Harness {
  pub vm: OrderingViewModel,
  pub store: Arc<MemoryDocumentStore>,
  pub identity: Arc<MockIdentityProvider>,
  pub location: Arc<MockLocationProvider>,
}

pub fn harness_with(config: OrderingConfig, items: &[CatalogItem]) -> Harness {
  let store = Arc::new(MemoryDocumentStore::with_items(&config.items_collection, items));
  let identity = Arc::new(MockIdentityProvider::new());
  let location = Arc::new(MockLocationProvider::new(home(), home_placemark()));
  let services = Services::new(store.clone(), identity.clone(), location.clone());
  let vm = OrderingViewModel::new(services, config).expect("default currency is valid");
  Harness {
    vm,
    store,
    identity,
    location,
  }
}

pub fn harness() -> Harness {
  harness_with(OrderingConfig::default(), &sample_items())
}

/// Harness after a granted authorization: located, signed in, catalog loaded.
pub async fn ready_harness() -> Harness {
  let h = harness();
  h.vm
    .handle_authorization_change(food_ordering::AuthorizationStatus::Granted)
    .await
    .expect("bootstrap succeeds");
  h
}

// food_ordering/examples/search_and_order.rs

use async_trait::async_trait;
use food_ordering::services::Fields;
use food_ordering::{
  AuthorizationStatus, CatalogItem, Coordinate, Document, DocumentStore, MemoryDocumentStore, MockIdentityProvider,
  MockLocationProvider, OrderingConfig, OrderingError, OrderingResult, OrderingViewModel, Placemark, Services,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

// A store whose writes can be switched off, standing in for a flaky network.
struct FlakyStore {
  inner: MemoryDocumentStore,
  offline: AtomicBool,
}

#[async_trait]
impl DocumentStore for FlakyStore {
  async fn fetch_all(&self, collection: &str) -> OrderingResult<Vec<Document>> {
    self.inner.fetch_all(collection).await
  }

  async fn upsert(&self, collection: &str, key: &str, fields: Fields) -> OrderingResult<()> {
    if self.offline.load(Ordering::SeqCst) {
      return Err(anyhow::anyhow!("network unreachable writing {}/{}", collection, key).into());
    }
    self.inner.upsert(collection, key, fields).await
  }

  async fn delete(&self, collection: &str, key: &str) -> OrderingResult<()> {
    self.inner.delete(collection, key).await
  }
}

#[tokio::main]
async fn main() -> OrderingResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Search and Order Example ---");

  let menu = vec![
    CatalogItem::new("burger", "Burger", 10.0),
    CatalogItem::new("pizza", "Pizza", 5.5),
    CatalogItem::new("burrito", "Burrito", 7.25),
  ];
  let store = Arc::new(FlakyStore {
    inner: MemoryDocumentStore::with_items("Items", &menu),
    offline: AtomicBool::new(false),
  });
  let services = Services::new(
    store.clone(),
    Arc::new(MockIdentityProvider::new()),
    Arc::new(MockLocationProvider::new(Coordinate::new(40.7128, -74.006), Placemark::default())),
  );
  let vm = OrderingViewModel::new(services, OrderingConfig::default().with_currency("EUR"))?;
  vm.handle_authorization_change(AuthorizationStatus::Granted).await?;

  // Search narrows the view; the catalog itself is untouched.
  vm.set_search("BUR");
  let names: Vec<String> = vm.filtered().into_iter().map(|i| i.name).collect();
  info!("Matches for 'BUR': {:?}", names);

  vm.toggle_cart_line("burger")?;
  vm.toggle_cart_line("burrito")?;
  info!("Total: {}", vm.compute_total());

  // First attempt fails: the ordered flag is rolled back and the error surfaces.
  store.offline.store(true, Ordering::SeqCst);
  match vm.submit_or_get_order().await {
    Err(OrderingError::Collaborator { source }) => warn!("Order failed: {}. Ordered = {}", source, vm.ordered()),
    other => info!("Unexpected outcome: {:?}", other),
  }

  // Back online: place, then cancel.
  store.offline.store(false, Ordering::SeqCst);
  info!("Submit: {:?}", vm.submit_or_get_order().await?);
  info!("Submit again: {:?}", vm.submit_or_get_order().await?);

  Ok(())
}

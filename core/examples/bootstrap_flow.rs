// food_ordering/examples/bootstrap_flow.rs

use food_ordering::{
  AuthorizationOutcome, AuthorizationStatus, CatalogItem, Coordinate, MemoryDocumentStore, MockIdentityProvider,
  MockLocationProvider, OrderingConfig, OrderingResult, OrderingViewModel, Placemark, Services,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> OrderingResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Bootstrap Flow Example ---");

  // 1. In-memory collaborators with a seeded catalog.
  let menu = vec![
    CatalogItem::new("burger", "Burger", 10.0),
    CatalogItem::new("pizza", "Pizza", 5.5),
    CatalogItem::new("burrito", "Burrito", 7.25),
  ];
  let store = Arc::new(MemoryDocumentStore::with_items("Items", &menu));
  let location = Arc::new(MockLocationProvider::new(
    Coordinate::new(48.8566, 2.3522),
    Placemark {
      name: Some("Rue de Rivoli".to_string()),
      locality: Some("Paris".to_string()),
    },
  ));
  let services = Services::new(store.clone(), Arc::new(MockIdentityProvider::new()), location.clone());
  let vm = OrderingViewModel::new(services, OrderingConfig::default())?;

  // 2. The platform reports "not yet asked": the view-model prompts for permission.
  let outcome = vm.handle_authorization_change(AuthorizationStatus::Undetermined).await?;
  assert_eq!(outcome, AuthorizationOutcome::PermissionRequested);
  info!("Permission prompts issued: {}", location.permission_requests());

  // 3. The user grants access: fix → address → session → catalog.
  let outcome = vm.handle_authorization_change(AuthorizationStatus::Granted).await?;
  info!("Bootstrap outcome: {:?}", outcome);
  info!("Address: {}", vm.address());
  info!("Session: {:?}", vm.session());
  info!("Catalog: {} items", vm.items().len());

  // 4. A later fix reuses the session and only refreshes the catalog.
  vm.handle_location_fix(Coordinate::new(48.8606, 2.3376)).await?;
  info!("Catalog fetches so far: {}", store.fetch_calls());

  Ok(())
}

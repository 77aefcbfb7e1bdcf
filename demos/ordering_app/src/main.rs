// ordering_app/src/main.rs

mod config;
mod errors;
mod menu;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;

use food_ordering::{
  AuthorizationOutcome, AuthorizationStatus, MemoryDocumentStore, MockIdentityProvider, MockLocationProvider,
  OrderingViewModel, Placemark, Services,
};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> AppResult<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting food ordering demo...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e);
    }
  };

  // In-memory collaborators standing in for the remote store, identity layer and device.
  let store = Arc::new(MemoryDocumentStore::new());
  store.seed(&app_config.ordering.items_collection, menu::seed_documents()?);
  let location = Arc::new(MockLocationProvider::new(
    app_config.coordinate,
    Placemark {
      name: Some("1 Market St".to_string()),
      locality: Some("San Francisco".to_string()),
    },
  ));
  let services = Services::new(store.clone(), Arc::new(MockIdentityProvider::new()), location);

  let vm = OrderingViewModel::new(services, app_config.ordering.clone())?;

  // --- Startup chain ---
  let mut outcome = vm.handle_authorization_change(app_config.authorization).await?;
  if outcome == AuthorizationOutcome::PermissionRequested {
    tracing::info!("Simulating the user accepting the location prompt.");
    outcome = vm.handle_authorization_change(AuthorizationStatus::Granted).await?;
  }
  if outcome == AuthorizationOutcome::Denied {
    tracing::warn!(no_location = vm.no_location(), "Location denied; the catalog stays empty.");
    return Ok(());
  }
  tracing::info!(address = %vm.address(), items = vm.items().len(), ?outcome, "Catalog ready.");

  // --- Search ---
  vm.set_search(app_config.search.clone());
  let matches = vm.filtered();
  tracing::info!(
    search = %app_config.search,
    matches = ?matches.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
    "Search applied."
  );

  // --- Cart ---
  for item in matches.iter() {
    vm.toggle_cart_line(&item.id)?;
  }
  tracing::info!(lines = vm.cart().len(), total = %vm.compute_total(), "Cart filled from search results.");

  // --- Order ---
  let placed = vm.submit_or_get_order().await?;
  if let Some(session) = vm.session() {
    if let Some(doc) = store.get(&app_config.ordering.users_collection, &session.uid) {
      let body = serde_json::to_string_pretty(&doc.fields).map_err(anyhow::Error::from)?;
      tracing::info!(?placed, uid = %session.uid, "Order document written:\n{}", body);
    }
  }

  let cancelled = vm.submit_or_get_order().await?;
  tracing::info!(?cancelled, ordered = vm.ordered(), "Order withdrawn. Demo finished.");

  Ok(())
}

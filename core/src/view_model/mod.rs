// food_ordering/src/view_model/mod.rs

//! The ordering view-model: catalog, search, cart and order state plus the
//! operations that drive the external collaborators.

pub mod bootstrap;
pub mod cart;
pub mod order;
pub mod pricing;
pub mod state;

pub use bootstrap::BootstrapCtxData;
pub use cart::CartToggle;
pub use order::OrderOutcome;
pub use pricing::PriceFormatter;
pub use state::OrderingState;

use crate::config::OrderingConfig;
use crate::error::{OrderingError, OrderingResult};
use crate::models::{AuthorizationStatus, CartLine, CatalogItem, Coordinate, Session};
use crate::pipeline::{ContextData, Pipeline, PipelineResult};
use crate::services::Services;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// What an authorization change led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationOutcome {
  /// Location is unavailable for this session; nothing was requested.
  Denied,
  /// A permission prompt was issued; a later authorization change carries the answer.
  PermissionRequested,
  /// A fix was obtained and the bootstrap pipeline ran.
  Located(PipelineResult),
}

/// Owns all ordering state and is its only writer.
///
/// Collaborator calls never happen while a state lock is held, so the presentation
/// layer can read `state()` at any time.
pub struct OrderingViewModel {
  state: ContextData<OrderingState>,
  services: Services,
  config: Arc<OrderingConfig>,
  prices: PriceFormatter,
  bootstrap: Pipeline<BootstrapCtxData, OrderingError>,
}

impl std::fmt::Debug for OrderingViewModel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderingViewModel")
      .field("config", &self.config)
      .field("bootstrap", &self.bootstrap)
      .finish_non_exhaustive()
  }
}

impl OrderingViewModel {
  /// Fails with `UnknownCurrency` when the configured currency code is not an ISO code.
  pub fn new(services: Services, config: OrderingConfig) -> OrderingResult<Self> {
    let prices = PriceFormatter::new(&config.currency_code)?;
    Ok(Self {
      state: ContextData::new(OrderingState::default()),
      services,
      config: Arc::new(config),
      prices,
      bootstrap: bootstrap::build_bootstrap_pipeline()?,
    })
  }

  /// Shared handle for observers.
  pub fn state(&self) -> ContextData<OrderingState> {
    self.state.clone()
  }

  pub fn snapshot(&self) -> OrderingState {
    self.state.snapshot()
  }

  pub fn config(&self) -> &OrderingConfig {
    &self.config
  }

  pub fn items(&self) -> Vec<CatalogItem> {
    self.state.read().items.clone()
  }

  pub fn cart(&self) -> Vec<CartLine> {
    self.state.read().cart.clone()
  }

  pub fn ordered(&self) -> bool {
    self.state.read().ordered
  }

  pub fn no_location(&self) -> bool {
    self.state.read().no_location
  }

  pub fn address(&self) -> String {
    self.state.read().address.clone()
  }

  pub fn session(&self) -> Option<Session> {
    self.state.read().session.clone()
  }

  pub fn show_menu(&self) -> bool {
    self.state.read().show_menu
  }

  pub fn toggle_menu(&self) {
    self.state.update(|s| s.show_menu = !s.show_menu);
  }

  // --- Startup chain ---

  /// Reacts to one authorization change. `Denied` is terminal: nothing is retried.
  #[instrument(name = "OrderingViewModel::handle_authorization_change", skip(self), err(Display))]
  pub async fn handle_authorization_change(&self, status: AuthorizationStatus) -> OrderingResult<AuthorizationOutcome> {
    match status {
      AuthorizationStatus::Denied => {
        warn!("Location access denied.");
        self.state.update(|s| s.no_location = true);
        Ok(AuthorizationOutcome::Denied)
      }
      AuthorizationStatus::Undetermined => {
        self.state.update(|s| s.no_location = false);
        self.services.location.request_permission().await?;
        info!("Location permission requested.");
        Ok(AuthorizationOutcome::PermissionRequested)
      }
      AuthorizationStatus::Granted => {
        self.state.update(|s| s.no_location = false);
        let coordinate = match self.services.location.request_location().await {
          Ok(coordinate) => coordinate,
          Err(e) => {
            self.handle_location_error(&e);
            return Err(e);
          }
        };
        let result = self.handle_location_fix(coordinate).await?;
        Ok(AuthorizationOutcome::Located(result))
      }
    }
  }

  /// Runs the bootstrap pipeline for a fix: store it, resolve the address (best effort),
  /// sign in unless a session exists, then fetch the catalog.
  #[instrument(name = "OrderingViewModel::handle_location_fix", skip(self), err(Display))]
  pub async fn handle_location_fix(&self, coordinate: Coordinate) -> OrderingResult<PipelineResult> {
    let ctx = ContextData::new(BootstrapCtxData {
      state: self.state.clone(),
      services: self.services.clone(),
      config: self.config.clone(),
      coordinate,
    });
    self.bootstrap.run(ctx).await
  }

  /// A failed fix only gets logged; the catalog stays unloaded.
  pub fn handle_location_error(&self, err: &OrderingError) {
    error!(error = %err, "Location fix failed; catalog will not be loaded.");
  }

  /// Signs in anonymously, then fetches the catalog. A failed sign-in skips the fetch.
  #[instrument(name = "OrderingViewModel::create_session", skip(self), err(Display))]
  pub async fn create_session(&self) -> OrderingResult<Session> {
    let session = bootstrap::sign_in(&self.state, self.services.identity.as_ref()).await?;
    self.fetch_catalog().await?;
    Ok(session)
  }

  /// Replaces the catalog and resets the filtered view. Returns the number of items loaded.
  ///
  /// The search text is not reapplied unless `refilter_after_fetch` is set.
  #[instrument(name = "OrderingViewModel::fetch_catalog", skip(self), err(Display))]
  pub async fn fetch_catalog(&self) -> OrderingResult<usize> {
    bootstrap::load_catalog(&self.state, self.services.store.as_ref(), &self.config).await
  }

  // --- Search ---

  pub fn set_search(&self, text: impl Into<String>) {
    let text = text.into();
    self.state.update(|s| s.search = text);
    self.apply_filter();
  }

  /// Recomputes the filtered view from the current search text.
  pub fn apply_filter(&self) {
    self.state.update(|s| s.applied_filter = s.search.clone());
  }

  /// Catalog items matching the last applied search, in catalog order.
  pub fn filtered(&self) -> Vec<CatalogItem> {
    self.state.read().filtered()
  }
}

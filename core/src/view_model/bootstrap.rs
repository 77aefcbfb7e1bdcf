// food_ordering/src/view_model/bootstrap.rs

//! The startup chain (location fix → address → session → catalog) as a staged
//! pipeline, plus the stage operations the view-model also exposes directly.

use crate::config::OrderingConfig;
use crate::error::{OrderingError, OrderingResult};
use crate::models::{CatalogItem, Coordinate, Session};
use crate::pipeline::{ContextData, Pipeline, PipelineControl, SkipCondition, StageKind};
use crate::services::{DocumentStore, IdentityProvider, LocationProvider, Services};
use crate::view_model::state::OrderingState;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const STORE_LOCATION: &str = "store_location";
pub const RESOLVE_ADDRESS: &str = "resolve_address";
pub const CREATE_SESSION: &str = "create_session";
pub const FETCH_CATALOG: &str = "fetch_catalog";

/// Context of one bootstrap run, started by a location fix.
#[derive(Clone)]
pub struct BootstrapCtxData {
  pub state: ContextData<OrderingState>,
  pub services: Services,
  pub config: Arc<OrderingConfig>,
  pub coordinate: Coordinate,
}

pub(crate) fn build_bootstrap_pipeline() -> OrderingResult<Pipeline<BootstrapCtxData, OrderingError>> {
  let session_present: SkipCondition<BootstrapCtxData> =
    Arc::new(|ctx: &BootstrapCtxData| ctx.state.read().session.is_some());

  let mut p = Pipeline::<BootstrapCtxData, OrderingError>::new(&[
    (STORE_LOCATION, StageKind::Required, None),
    (RESOLVE_ADDRESS, StageKind::BestEffort, None),
    (CREATE_SESSION, StageKind::Required, Some(session_present)),
    (FETCH_CATALOG, StageKind::Required, None),
  ]);

  p.on(STORE_LOCATION, store_location_stage)?;
  p.on(RESOLVE_ADDRESS, resolve_address_stage)?;
  p.on(CREATE_SESSION, create_session_stage)?;
  p.on(FETCH_CATALOG, fetch_catalog_stage)?;
  Ok(p)
}

async fn store_location_stage(ctx: ContextData<BootstrapCtxData>) -> OrderingResult<PipelineControl> {
  let guard = ctx.read();
  guard.state.update(|s| s.coordinate = Some(guard.coordinate));
  info!(
    latitude = guard.coordinate.latitude,
    longitude = guard.coordinate.longitude,
    "Location fix stored."
  );
  Ok(PipelineControl::Continue)
}

async fn resolve_address_stage(ctx: ContextData<BootstrapCtxData>) -> OrderingResult<PipelineControl> {
  let (state, services, coordinate) = {
    let guard = ctx.read();
    (guard.state.clone(), guard.services.clone(), guard.coordinate)
  };
  resolve_address(&state, services.location.as_ref(), coordinate).await?;
  Ok(PipelineControl::Continue)
}

async fn create_session_stage(ctx: ContextData<BootstrapCtxData>) -> OrderingResult<PipelineControl> {
  let (state, services) = {
    let guard = ctx.read();
    (guard.state.clone(), guard.services.clone())
  };
  sign_in(&state, services.identity.as_ref()).await?;
  Ok(PipelineControl::Continue)
}

async fn fetch_catalog_stage(ctx: ContextData<BootstrapCtxData>) -> OrderingResult<PipelineControl> {
  let (state, services, config) = {
    let guard = ctx.read();
    (guard.state.clone(), guard.services.clone(), guard.config.clone())
  };
  load_catalog(&state, services.store.as_ref(), &config).await?;
  Ok(PipelineControl::Continue)
}

/// Reverse-geocodes `coordinate` into the display address. On failure the address is left as is.
#[instrument(skip(state, location))]
pub(crate) async fn resolve_address(
  state: &ContextData<OrderingState>,
  location: &dyn LocationProvider,
  coordinate: Coordinate,
) -> OrderingResult<String> {
  let placemark = location.reverse_geocode(coordinate).await.map_err(|e| {
    warn!(error = %e, "Reverse geocoding failed, keeping previous address.");
    e
  })?;
  let address = placemark.display_address();
  state.update(|s| s.address = address.clone());
  info!(%address, "Address resolved.");
  Ok(address)
}

#[instrument(skip_all)]
pub(crate) async fn sign_in(state: &ContextData<OrderingState>, identity: &dyn IdentityProvider) -> OrderingResult<Session> {
  let session = identity.sign_in_anonymously().await.map_err(|e| {
    error!(error = %e, "Anonymous sign-in failed; catalog will not be fetched.");
    e
  })?;
  state.update(|s| s.session = Some(session.clone()));
  info!(uid = %session.uid, "Anonymous session established.");
  Ok(session)
}

/// Replaces the catalog wholesale. Nothing changes unless every document maps cleanly.
///
/// `added` flags are rebuilt from the cart, and cart lines whose item left the catalog
/// are dropped, so flags and cart stay in step across refetches.
#[instrument(skip_all, fields(collection = %config.items_collection))]
pub(crate) async fn load_catalog(
  state: &ContextData<OrderingState>,
  store: &dyn DocumentStore,
  config: &OrderingConfig,
) -> OrderingResult<usize> {
  let docs = store.fetch_all(&config.items_collection).await.map_err(|e| {
    error!(error = %e, "Catalog fetch failed; keeping the current catalog.");
    e
  })?;

  let mut items = docs
    .iter()
    .map(CatalogItem::from_document)
    .collect::<OrderingResult<Vec<_>>>()
    .map_err(|e| {
      error!(error = %e, "Catalog document rejected; keeping the current catalog.");
      e
    })?;

  let count = items.len();
  let dropped = state.update(|s| {
    let before = s.cart.len();
    s.cart.retain(|line| items.iter().any(|item| item.id == line.item.id));
    for item in &mut items {
      item.added = s.cart.iter().any(|line| line.item.id == item.id);
    }
    s.items = items;
    s.applied_filter = if config.refilter_after_fetch {
      s.search.clone()
    } else {
      String::new()
    };
    before - s.cart.len()
  });

  if dropped > 0 {
    warn!(dropped, "Cart lines dropped: their items are no longer in the catalog.");
  }
  info!(count, "Catalog loaded.");
  Ok(count)
}

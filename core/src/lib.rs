// food_ordering/src/lib.rs

//! Food ordering: the view-model behind a single-screen food ordering client.
//!
//! It covers:
//!  - Browsing a catalog fetched from a remote document store.
//!  - Case-insensitive substring search over item names.
//!  - A cart of toggled items and its formatted total.
//!  - Placing (and cancelling) an order tagged with the device location.
//!
//! The remote store, the identity layer and the location service are collaborators
//! behind traits in [`services`]. The startup chain (authorization → location fix →
//! address → anonymous session → catalog) runs as an explicit staged pipeline,
//! see [`pipeline`] and [`view_model::bootstrap`].

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod view_model;

// --- Re-exports for the Public API ---

pub use crate::config::OrderingConfig;
pub use crate::error::{OrderingError, OrderingResult, PipelineError};
pub use crate::models::{
  AuthorizationStatus, CartLine, CatalogItem, Coordinate, GeoPoint, OrderDocument, OrderLine, Placemark, Session,
};
pub use crate::pipeline::{ContextData, Pipeline, PipelineControl, PipelineResult, StageKind};
pub use crate::services::{
  Document, DocumentStore, IdentityProvider, LocationProvider, MemoryDocumentStore, MockIdentityProvider,
  MockLocationProvider, Services,
};
pub use crate::view_model::{AuthorizationOutcome, CartToggle, OrderOutcome, OrderingState, OrderingViewModel};

/*
    Typical wiring:
    1. Build `Services` from a `DocumentStore`, an `IdentityProvider` and a `LocationProvider`.
    2. `OrderingViewModel::new(services, OrderingConfig::default())?`.
    3. Forward every platform authorization change to `handle_authorization_change`.
       `Granted` requests a fix and runs the bootstrap pipeline, which ends with the catalog loaded.
    4. Bind the search box to `set_search`, item buttons to `toggle_cart_line`, the total label to
       `compute_total`, and the order button to `submit_or_get_order`.
*/

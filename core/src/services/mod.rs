// food_ordering/src/services/mod.rs

//! Contracts for the external collaborators (document store, identity layer,
//! location service) and in-memory implementations of each.

pub mod document_store;
pub mod identity;
pub mod identity_mock;
pub mod location;
pub mod location_mock;
pub mod memory_store;

pub use document_store::{Document, DocumentStore, Fields};
pub use identity::IdentityProvider;
pub use identity_mock::MockIdentityProvider;
pub use location::LocationProvider;
pub use location_mock::MockLocationProvider;
pub use memory_store::MemoryDocumentStore;

use std::sync::Arc;

/// The collaborators a view-model talks to, shared by every pipeline stage.
#[derive(Clone)]
pub struct Services {
  pub store: Arc<dyn DocumentStore>,
  pub identity: Arc<dyn IdentityProvider>,
  pub location: Arc<dyn LocationProvider>,
}

impl Services {
  pub fn new(
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
    location: Arc<dyn LocationProvider>,
  ) -> Self {
    Self {
      store,
      identity,
      location,
    }
  }
}

impl std::fmt::Debug for Services {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Services").finish_non_exhaustive()
  }
}

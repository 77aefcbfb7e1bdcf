// food_ordering/src/services/identity_mock.rs
use crate::error::{OrderingError, OrderingResult};
use crate::models::Session;
use crate::services::identity::IdentityProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Issues a fresh anonymous uid per sign-in.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
  fail: AtomicBool,
  sign_in_calls: AtomicUsize,
}

impl MockIdentityProvider {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_fail(&self, fail: bool) {
    self.fail.store(fail, Ordering::SeqCst);
  }

  pub fn sign_in_calls(&self) -> usize {
    self.sign_in_calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
  #[instrument(skip(self))]
  async fn sign_in_anonymously(&self) -> OrderingResult<Session> {
    self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail.load(Ordering::SeqCst) {
      warn!("Simulated anonymous sign-in failure");
      return Err(OrderingError::Session("simulated sign-in failure".to_string()));
    }
    let session = Session::new(format!("anon_{}", Uuid::new_v4().simple()));
    info!("Anonymous session issued: {}", session.uid);
    Ok(session)
  }
}

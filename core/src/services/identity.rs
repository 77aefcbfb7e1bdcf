// food_ordering/src/services/identity.rs

use crate::error::OrderingResult;
use crate::models::Session;
use async_trait::async_trait;

/// Identity layer. Only anonymous sign-in is supported.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
  async fn sign_in_anonymously(&self) -> OrderingResult<Session>;
}

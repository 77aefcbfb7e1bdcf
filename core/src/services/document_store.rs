// food_ordering/src/services/document_store.rs

use crate::error::OrderingResult;
use async_trait::async_trait;

/// Flat field set of a document.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A document as returned by the store: its store-assigned key plus fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  pub key: String,
  pub fields: Fields,
}

impl Document {
  pub fn new(key: impl Into<String>, fields: Fields) -> Self {
    Self { key: key.into(), fields }
  }
}

/// Remote document database. Every call is single-shot and reports its own failure;
/// nothing here retries.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Every document in `collection`, in store order.
  async fn fetch_all(&self, collection: &str) -> OrderingResult<Vec<Document>>;

  /// Creates or replaces the document at `collection/key`.
  async fn upsert(&self, collection: &str, key: &str, fields: Fields) -> OrderingResult<()>;

  async fn delete(&self, collection: &str, key: &str) -> OrderingResult<()>;
}

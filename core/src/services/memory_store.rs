// food_ordering/src/services/memory_store.rs
use crate::error::{OrderingError, OrderingResult};
use crate::models::CatalogItem;
use crate::services::document_store::{Document, DocumentStore, Fields};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{info, instrument, warn};

/// In-process document store. Documents keep insertion order within a collection.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
  collections: RwLock<HashMap<String, Vec<Document>>>,
  fail_fetch: AtomicBool,
  fail_writes: AtomicBool,
  fetch_calls: AtomicUsize,
  upsert_calls: AtomicUsize,
  delete_calls: AtomicUsize,
}

impl MemoryDocumentStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store pre-populated with `items` under `collection`, keyed by item id.
  pub fn with_items(collection: &str, items: &[CatalogItem]) -> Self {
    let store = Self::new();
    store.seed(
      collection,
      items.iter().map(|item| Document::new(item.id.clone(), item.to_fields())),
    );
    store
  }

  pub fn seed(&self, collection: &str, docs: impl IntoIterator<Item = Document>) {
    let mut guard = self.collections.write();
    let entries = guard.entry(collection.to_string()).or_default();
    for doc in docs {
      upsert_in(entries, doc);
    }
  }

  pub fn get(&self, collection: &str, key: &str) -> Option<Document> {
    self
      .collections
      .read()
      .get(collection)
      .and_then(|docs| docs.iter().find(|d| d.key == key).cloned())
  }

  pub fn documents(&self, collection: &str) -> Vec<Document> {
    self.collections.read().get(collection).cloned().unwrap_or_default()
  }

  pub fn set_fail_fetch(&self, fail: bool) {
    self.fail_fetch.store(fail, Ordering::SeqCst);
  }

  /// Makes every upsert and delete fail until reset.
  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn fetch_calls(&self) -> usize {
    self.fetch_calls.load(Ordering::SeqCst)
  }

  pub fn upsert_calls(&self) -> usize {
    self.upsert_calls.load(Ordering::SeqCst)
  }

  pub fn delete_calls(&self) -> usize {
    self.delete_calls.load(Ordering::SeqCst)
  }

  fn write_failure(&self, collection: &str, key: &str) -> Option<OrderingError> {
    self.fail_writes.load(Ordering::SeqCst).then(|| OrderingError::Write {
      collection: collection.to_string(),
      key: key.to_string(),
      message: "simulated write failure".to_string(),
    })
  }
}

fn upsert_in(entries: &mut Vec<Document>, doc: Document) {
  match entries.iter_mut().find(|d| d.key == doc.key) {
    Some(existing) => *existing = doc,
    None => entries.push(doc),
  }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
  #[instrument(skip(self))]
  async fn fetch_all(&self, collection: &str) -> OrderingResult<Vec<Document>> {
    self.fetch_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_fetch.load(Ordering::SeqCst) {
      warn!("Simulated fetch failure for '{}'", collection);
      return Err(OrderingError::Fetch {
        collection: collection.to_string(),
        message: "simulated fetch failure".to_string(),
      });
    }
    let docs = self.documents(collection);
    info!("Fetched {} documents from '{}'", docs.len(), collection);
    Ok(docs)
  }

  #[instrument(skip(self, fields))]
  async fn upsert(&self, collection: &str, key: &str, fields: Fields) -> OrderingResult<()> {
    self.upsert_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(err) = self.write_failure(collection, key) {
      warn!("Simulated upsert failure for '{}/{}'", collection, key);
      return Err(err);
    }
    let mut guard = self.collections.write();
    upsert_in(guard.entry(collection.to_string()).or_default(), Document::new(key, fields));
    info!("Upserted '{}/{}'", collection, key);
    Ok(())
  }

  #[instrument(skip(self))]
  async fn delete(&self, collection: &str, key: &str) -> OrderingResult<()> {
    self.delete_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(err) = self.write_failure(collection, key) {
      warn!("Simulated delete failure for '{}/{}'", collection, key);
      return Err(err);
    }
    if let Some(docs) = self.collections.write().get_mut(collection) {
      docs.retain(|d| d.key != key);
    }
    info!("Deleted '{}/{}'", collection, key);
    Ok(())
  }
}

// tests/order_tests.rs
mod common;

use async_trait::async_trait;
use common::*;
use food_ordering::services::Fields;
use food_ordering::{
  AuthorizationStatus, ContextData, Document, DocumentStore, MockIdentityProvider, MockLocationProvider,
  OrderDocument, OrderOutcome, OrderingConfig, OrderingError, OrderingResult, OrderingState, OrderingViewModel,
  Services,
};
use parking_lot::Mutex;
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn test_place_order_writes_session_document() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.toggle_cart_line("burger").unwrap();
  h.vm.toggle_cart_line("pizza").unwrap();
  let uid = h.vm.session().unwrap().uid;

  let outcome = h.vm.submit_or_get_order().await.unwrap();

  assert_eq!(outcome, OrderOutcome::Placed);
  assert!(h.vm.ordered());
  let doc = h.store.get("Users", &uid).expect("order document written");
  let order: OrderDocument = serde_json::from_value(serde_json::Value::Object(doc.fields)).unwrap();
  assert_eq!(order.total_cost, "$15.50");
  assert_eq!(order.location.latitude, home().latitude);
  assert_eq!(order.location.longitude, home().longitude);
  let lines: Vec<(&str, u32, f64)> = order
    .ordered_food
    .iter()
    .map(|l| (l.item_name.as_str(), l.item_quantity, l.item_cost))
    .collect();
  assert_eq!(lines, vec![("Burger", 1, 10.0), ("Pizza", 1, 5.5)]);
}

#[tokio::test]
#[serial]
async fn test_order_document_uses_wire_field_names() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.toggle_cart_line("burrito").unwrap();
  let uid = h.vm.session().unwrap().uid;

  h.vm.submit_or_get_order().await.unwrap();

  let fields = h.store.get("Users", &uid).unwrap().fields;
  let line = &fields["ordered_food"][0];
  assert_eq!(line["item_name"], "Burrito");
  assert_eq!(line["item_quantity"], 1);
  assert_eq!(line["item_cost"], 7.25);
  assert_eq!(fields["total_cost"], "$7.25");
  assert!(fields["location"]["latitude"].is_number());
  assert!(fields["location"]["longitude"].is_number());
}

#[tokio::test]
#[serial]
async fn test_second_submit_cancels_the_order() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.toggle_cart_line("pizza").unwrap();
  let uid = h.vm.session().unwrap().uid;
  h.vm.submit_or_get_order().await.unwrap();

  let outcome = h.vm.submit_or_get_order().await.unwrap();

  assert_eq!(outcome, OrderOutcome::Cancelled);
  assert!(!h.vm.ordered());
  assert!(h.store.get("Users", &uid).is_none());
  assert_eq!(h.store.delete_calls(), 1);
}

#[tokio::test]
#[serial]
async fn test_failed_placement_rolls_back_flag() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.toggle_cart_line("pizza").unwrap();
  h.store.set_fail_writes(true);

  let err = h.vm.submit_or_get_order().await.unwrap_err();

  assert!(matches!(err, OrderingError::Write { .. }));
  assert!(!h.vm.ordered());
  assert_eq!(h.store.upsert_calls(), 1);
}

#[tokio::test]
#[serial]
async fn test_failed_cancellation_restores_flag() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.toggle_cart_line("pizza").unwrap();
  let uid = h.vm.session().unwrap().uid;
  h.vm.submit_or_get_order().await.unwrap();
  h.store.set_fail_writes(true);

  let err = h.vm.submit_or_get_order().await.unwrap_err();

  assert!(matches!(err, OrderingError::Write { .. }));
  assert!(h.vm.ordered());
  assert!(h.store.get("Users", &uid).is_some());
}

#[tokio::test]
#[serial]
async fn test_submit_without_session_changes_nothing() {
  setup_tracing();
  let h = harness();

  let err = h.vm.submit_or_get_order().await.unwrap_err();

  assert!(matches!(err, OrderingError::NoSession));
  assert!(!h.vm.ordered());
  assert_eq!(h.store.upsert_calls(), 0);
}

#[tokio::test]
#[serial]
async fn test_submit_without_location_changes_nothing() {
  setup_tracing();
  let h = harness();
  h.vm.create_session().await.unwrap();
  h.vm.toggle_cart_line("burger").unwrap();

  let err = h.vm.submit_or_get_order().await.unwrap_err();

  assert!(matches!(err, OrderingError::NoLocationFix));
  assert!(!h.vm.ordered());
  assert_eq!(h.store.upsert_calls(), 0);
}

// --- Optimistic flag observation ---

/// Store that records the view-model's `ordered` flag at the moment each write arrives.
#[derive(Default)]
struct ObservingStore {
  items: Vec<Document>,
  observed: Mutex<Option<ContextData<OrderingState>>>,
  seen_during_write: Mutex<Vec<bool>>,
  fail_writes: bool,
}

impl ObservingStore {
  fn record(&self) {
    if let Some(state) = self.observed.lock().as_ref() {
      self.seen_during_write.lock().push(state.read().ordered);
    }
  }

  fn result(&self, key: &str) -> OrderingResult<()> {
    if self.fail_writes {
      return Err(OrderingError::Write {
        collection: "Users".to_string(),
        key: key.to_string(),
        message: "offline".to_string(),
      });
    }
    Ok(())
  }
}

#[async_trait]
impl DocumentStore for ObservingStore {
  async fn fetch_all(&self, _collection: &str) -> OrderingResult<Vec<Document>> {
    Ok(self.items.clone())
  }

  async fn upsert(&self, _collection: &str, key: &str, _fields: Fields) -> OrderingResult<()> {
    self.record();
    self.result(key)
  }

  async fn delete(&self, _collection: &str, key: &str) -> OrderingResult<()> {
    self.record();
    self.result(key)
  }
}

async fn observed_view_model(fail_writes: bool) -> (OrderingViewModel, Arc<ObservingStore>) {
  let store = Arc::new(ObservingStore {
    items: sample_items()
      .iter()
      .map(|i| Document::new(i.id.clone(), i.to_fields()))
      .collect(),
    fail_writes,
    ..Default::default()
  });
  let services = Services::new(
    store.clone(),
    Arc::new(MockIdentityProvider::new()),
    Arc::new(MockLocationProvider::new(home(), home_placemark())),
  );
  let vm = OrderingViewModel::new(services, OrderingConfig::default()).unwrap();
  *store.observed.lock() = Some(vm.state());
  vm.handle_authorization_change(AuthorizationStatus::Granted).await.unwrap();
  (vm, store)
}

#[tokio::test]
#[serial]
async fn test_ordered_flag_flips_before_the_write_completes() {
  setup_tracing();
  let (vm, store) = observed_view_model(false).await;
  vm.toggle_cart_line("burger").unwrap();

  vm.submit_or_get_order().await.unwrap();
  vm.submit_or_get_order().await.unwrap();

  assert_eq!(*store.seen_during_write.lock(), vec![true, false]);
}

#[tokio::test]
#[serial]
async fn test_optimistic_flag_reverts_on_write_failure() {
  setup_tracing();
  let (vm, store) = observed_view_model(true).await;
  vm.toggle_cart_line("burger").unwrap();

  assert!(vm.submit_or_get_order().await.is_err());

  assert_eq!(*store.seen_during_write.lock(), vec![true]);
  assert!(!vm.ordered());
}

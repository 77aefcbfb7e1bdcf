// tests/catalog_filter_tests.rs
mod common;

use common::*;
use food_ordering::{CatalogItem, OrderingConfig};
use serial_test::serial;

fn names(items: &[CatalogItem]) -> Vec<&str> {
  items.iter().map(|i| i.name.as_str()).collect()
}

#[tokio::test]
#[serial]
async fn test_search_is_case_insensitive_substring() {
  setup_tracing();
  let h = ready_harness().await;

  h.vm.set_search("bur");
  assert_eq!(names(&h.vm.filtered()), vec!["Burger", "Burrito"]);

  h.vm.set_search("ZZ");
  assert_eq!(names(&h.vm.filtered()), vec!["Pizza"]);

  h.vm.set_search("sushi");
  assert!(h.vm.filtered().is_empty());
}

#[tokio::test]
#[serial]
async fn test_empty_search_yields_full_catalog() {
  setup_tracing();
  let h = ready_harness().await;

  h.vm.set_search("pi");
  h.vm.set_search("");

  assert_eq!(h.vm.filtered(), h.vm.items());
}

#[tokio::test]
#[serial]
async fn test_filter_matches_definition_for_many_queries() {
  setup_tracing();
  let h = ready_harness().await;
  for query in ["", "b", "B", "u", "rr", "PIZZA", "burg", "x", "a"] {
    h.vm.set_search(query);
    let expected: Vec<CatalogItem> = h
      .vm
      .items()
      .into_iter()
      .filter(|i| i.name.to_lowercase().contains(&query.to_lowercase()))
      .collect();
    assert_eq!(h.vm.filtered(), expected, "query {:?}", query);
  }
}

#[tokio::test]
#[serial]
async fn test_fetch_resets_filtered_view_without_reapplying_search() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.set_search("bur");

  h.vm.fetch_catalog().await.unwrap();

  assert_eq!(h.vm.snapshot().search, "bur");
  assert_eq!(h.vm.filtered().len(), 3);

  h.vm.apply_filter();
  assert_eq!(names(&h.vm.filtered()), vec!["Burger", "Burrito"]);
}

#[tokio::test]
#[serial]
async fn test_refilter_after_fetch_when_configured() {
  setup_tracing();
  let h = harness_with(OrderingConfig::default().with_refilter_after_fetch(true), &sample_items());
  h.vm.set_search("bur");

  h.vm.fetch_catalog().await.unwrap();

  assert_eq!(names(&h.vm.filtered()), vec!["Burger", "Burrito"]);
}

#[tokio::test]
#[serial]
async fn test_filtered_view_reflects_added_flags() {
  setup_tracing();
  let h = ready_harness().await;
  h.vm.set_search("bur");

  h.vm.toggle_cart_line("burrito").unwrap();

  let filtered = h.vm.filtered();
  let burrito = filtered.iter().find(|i| i.id == "burrito").unwrap();
  assert!(burrito.added);
  assert!(filtered.iter().filter(|i| i.id != "burrito").all(|i| !i.added));
}

#[test]
fn test_item_maps_from_document_fields() {
  let original = item("ramen", "Ramen", 12.5);
  let doc = food_ordering::Document::new("ramen", original.to_fields());

  let parsed = CatalogItem::from_document(&doc).unwrap();

  assert_eq!(parsed, original);
}

#[test]
fn test_item_with_missing_field_is_rejected() {
  let mut fields = item("ramen", "Ramen", 12.5).to_fields();
  fields.remove("item_ratings");
  let doc = food_ordering::Document::new("ramen", fields);

  assert!(matches!(
    CatalogItem::from_document(&doc),
    Err(food_ordering::OrderingError::MalformedDocument { .. })
  ));
}

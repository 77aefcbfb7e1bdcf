// food_ordering/src/config.rs

/// Settings for an `OrderingViewModel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingConfig {
  /// Collection holding the catalog.
  pub items_collection: String,
  /// Collection holding one order document per session uid.
  pub users_collection: String,
  /// ISO 4217 code used to format totals.
  pub currency_code: String,
  /// Re-run the current search after a catalog fetch. Off by default: a fetch resets
  /// the filtered view to the full catalog even when search text is set.
  pub refilter_after_fetch: bool,
}

impl Default for OrderingConfig {
  fn default() -> Self {
    Self {
      items_collection: "Items".to_string(),
      users_collection: "Users".to_string(),
      currency_code: "USD".to_string(),
      refilter_after_fetch: false,
    }
  }
}

impl OrderingConfig {
  pub fn with_items_collection(mut self, collection: impl Into<String>) -> Self {
    self.items_collection = collection.into();
    self
  }

  pub fn with_users_collection(mut self, collection: impl Into<String>) -> Self {
    self.users_collection = collection.into();
    self
  }

  pub fn with_currency(mut self, code: impl Into<String>) -> Self {
    self.currency_code = code.into();
    self
  }

  pub fn with_refilter_after_fetch(mut self, refilter: bool) -> Self {
    self.refilter_after_fetch = refilter;
    self
  }
}

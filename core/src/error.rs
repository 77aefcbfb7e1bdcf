// food_ordering/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors raised by the staged pipeline engine itself, independent of what the stages do.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Handler missing for required stage: {stage}")]
  HandlerMissing { stage: String },

  #[error("Stage not found: {stage}")]
  UnknownStage { stage: String },
}

#[derive(Debug, Error)]
pub enum OrderingError {
  #[error("Location access was denied by the user")]
  LocationDenied,

  #[error("Location fix failed: {0}")]
  Location(String),

  #[error("Reverse geocoding failed: {0}")]
  Geocode(String),

  #[error("Anonymous session creation failed: {0}")]
  Session(String),

  #[error("Fetching collection '{collection}' failed: {message}")]
  Fetch { collection: String, message: String },

  #[error("Document '{key}' is malformed. Source: {source}")]
  MalformedDocument {
    key: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Writing document '{collection}/{key}' failed: {message}")]
  Write {
    collection: String,
    key: String,
    message: String,
  },

  #[error("Catalog item not found: {id}")]
  ItemNotFound { id: String },

  #[error("No anonymous session has been established")]
  NoSession,

  #[error("No location fix is available for the order")]
  NoLocationFix,

  #[error("Unknown ISO currency code: {0}")]
  UnknownCurrency(String),

  #[error("Order document could not be encoded. Source: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("Collaborator failure. Source: {source}")]
  Collaborator {
    #[source]
    source: AnyhowError,
  },

  #[error(transparent)]
  Pipeline(#[from] PipelineError),
}

impl From<AnyhowError> for OrderingError {
  fn from(err: AnyhowError) -> Self {
    OrderingError::Collaborator { source: err }
  }
}

pub type OrderingResult<T, E = OrderingError> = std::result::Result<T, E>;

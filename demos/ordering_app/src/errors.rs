// ordering_app/src/errors.rs

use food_ordering::OrderingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Ordering Error: {source}")]
  Ordering {
    #[from]
    source: OrderingError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

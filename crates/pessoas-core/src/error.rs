//! Error types for `pessoas-core`.

use thiserror::Error;
use uuid::Uuid;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// Input rejected before touching the store.
  #[error("invalid {field}: {reason}")]
  Validation {
    field:  &'static str,
    reason: String,
  },

  /// The store's uniqueness constraint on `apelido` rejected the insert.
  #[error("apelido already taken: {0:?}")]
  ApelidoTaken(String),

  #[error("pessoa not found: {0}")]
  NotFound(Uuid),

  #[error("store error: {0}")]
  Store(#[source] BoxError),

  #[error("cache error: {0}")]
  Cache(#[source] BoxError),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  pub(crate) fn cache(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Cache(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

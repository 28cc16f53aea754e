//! Error types for `mcrev-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown state code: {0:?}")]
  UnknownState(String),

  #[error("catalog deserialization error: {0}")]
  Catalog(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

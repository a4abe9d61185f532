//! Error types for `mailup-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The contact type exposes no accessor for the requested field.
  #[error("contact does not expose field {field:?}")]
  FieldAccess { field: String },

  #[error("remote returned a non-numeric contact id: {0:?}")]
  InvalidRemoteId(String),

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub fn field_access(field: impl Into<String>) -> Self {
    Self::FieldAccess { field: field.into() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

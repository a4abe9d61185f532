//! Adapter configuration, deserialised once at start-up.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{FieldSpec, PayloadShape},
};

/// OAuth client registration plus the account the adapter logs in as.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub client_id:     String,
  pub client_secret: String,
  pub username:      String,
  pub password:      String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Everything the adapter needs, as read from the module config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
  #[serde(flatten)]
  pub credentials:     Credentials,
  /// Contact field holding the e-mail address.
  pub email_field:     String,
  /// Contact field holding the display name.
  pub name_field:      String,
  /// Contact field the remote contact id is written back to.
  pub remote_id_field: String,
  #[serde(default)]
  pub contact_fields:  Vec<FieldSpec>,
  #[serde(default)]
  pub payload_shape:   PayloadShape,
}

impl AdapterConfig {
  /// Reject configurations that would make every operation fail with a
  /// field-access error.
  pub fn validate(&self) -> Result<()> {
    for (key, value) in [
      ("email_field", &self.email_field),
      ("name_field", &self.name_field),
      ("remote_id_field", &self.remote_id_field),
    ] {
      if value.trim().is_empty() {
        return Err(Error::InvalidConfig(format!("`{key}` must not be empty")));
      }
    }
    if let Some(pos) = self.contact_fields.iter().position(|f| f.name.trim().is_empty()) {
      return Err(Error::InvalidConfig(format!(
        "`contact_fields[{pos}].name` must not be empty"
      )));
    }
    Ok(())
  }
}

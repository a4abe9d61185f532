//! Wire types for subscription requests.

use std::collections::BTreeMap;

use mailup_core::{Result, contact::FieldValue, field::RemoteFieldId};
use serde::{Deserialize, Serialize};

/// One contact as the remote expects it: `{ "Email", "Name", "Fields" }`.
///
/// Built fresh for every call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionRequest {
  pub email:  FieldValue,
  pub name:   FieldValue,
  pub fields: RequestFields,
}

impl SubscriptionRequest {
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string(self)?)
  }

  /// Serialize a whole batch as a single JSON array.
  pub fn batch_to_json(batch: &[SubscriptionRequest]) -> Result<String> {
    Ok(serde_json::to_string(batch)?)
  }
}

/// The custom-field section, in one of the two supported layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestFields {
  Object(BTreeMap<String, FieldValue>),
  Descriptors(Vec<FieldDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldDescriptor {
  pub description: String,
  pub id:          RemoteFieldId,
  pub value:       FieldValue,
}

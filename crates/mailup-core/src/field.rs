//! Custom-field mapping declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The remote slot a custom field is written to. The remote API numbers its
/// slots, but some installations address them by string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteFieldId {
  Number(i64),
  Key(String),
}

impl fmt::Display for RemoteFieldId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Number(n) => write!(f, "{n}"),
      Self::Key(k) => f.write_str(k),
    }
  }
}

impl From<i64> for RemoteFieldId {
  fn from(n: i64) -> Self { Self::Number(n) }
}

impl From<i32> for RemoteFieldId {
  fn from(n: i32) -> Self { Self::Number(n.into()) }
}

impl From<&str> for RemoteFieldId {
  fn from(k: &str) -> Self { Self::Key(k.to_owned()) }
}

/// Declares that the local field `name` is pushed to remote slot `id`.
///
/// Order matters for [`PayloadShape::Descriptors`] payloads, which list the
/// fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
  pub name: String,
  pub id:   RemoteFieldId,
}

impl FieldSpec {
  pub fn new(name: impl Into<String>, id: impl Into<RemoteFieldId>) -> Self {
    Self { name: name.into(), id: id.into() }
  }
}

/// How custom fields are laid out in a subscription request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
  /// `"Fields": { "<name>": <value>, … }`
  Object,
  /// `"Fields": [ { "Description": …, "Id": …, "Value": … }, … ]`
  #[default]
  Descriptors,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_spec_accepts_numeric_and_string_ids() {
    let specs: Vec<FieldSpec> = serde_json::from_str(
      r#"[{"name":"city","id":7},{"name":"zip","id":"zip_code"}]"#,
    )
    .unwrap();
    assert_eq!(specs[0], FieldSpec::new("city", 7));
    assert_eq!(specs[1], FieldSpec::new("zip", "zip_code"));
  }

  #[test]
  fn payload_shape_defaults_to_descriptors() {
    assert_eq!(PayloadShape::default(), PayloadShape::Descriptors);
    let shape: PayloadShape = serde_json::from_str(r#""object""#).unwrap();
    assert_eq!(shape, PayloadShape::Object);
  }
}

//! The contact accessor contract.
//!
//! The adapter never knows the concrete shape of a local contact entity. It
//! reads and writes fields by name through [`ContactRecord`], and an entity
//! that does not expose a name fails with [`Error::FieldAccess`] instead of
//! silently producing a value.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Values ──────────────────────────────────────────────────────────────────

/// A single field value as it travels between a contact and the remote API.
///
/// Serialized untagged, so each variant becomes the matching JSON scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  #[default]
  Null,
  Bool(bool),
  Integer(i64),
  Text(String),
}

impl FieldValue {
  /// `true` for values the remote treats as "not filled in": null, `false`,
  /// zero, the empty string and the string `"0"`.
  pub fn is_blank(&self) -> bool {
    match self {
      Self::Null => true,
      Self::Bool(b) => !b,
      Self::Integer(i) => *i == 0,
      Self::Text(s) => s.is_empty() || s == "0",
    }
  }

  /// Interpret the value as an integer. Text is trimmed before parsing.
  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Self::Integer(i) => Some(*i),
      Self::Text(s) => s.trim().parse().ok(),
      Self::Null | Self::Bool(_) => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }
}

impl fmt::Display for FieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Null => Ok(()),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Integer(i) => write!(f, "{i}"),
      Self::Text(s) => f.write_str(s),
    }
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<String> for FieldValue {
  fn from(s: String) -> Self { Self::Text(s) }
}

impl From<i64> for FieldValue {
  fn from(i: i64) -> Self { Self::Integer(i) }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self { Self::Bool(b) }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
  fn from(v: Option<T>) -> Self { v.map_or(Self::Null, Into::into) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Named, per-field read/write access to a local contact entity.
///
/// Implementations must return [`Error::FieldAccess`] for any name they do
/// not expose. Most entity types implement this by delegating to a static
/// [`AccessorTable`].
pub trait ContactRecord {
  fn get_field(&self, name: &str) -> Result<FieldValue>;

  fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;

  /// Succeeds when [`set_field`](Self::set_field) would accept `name`,
  /// without writing anything.
  fn check_writable(&self, name: &str) -> Result<()>;
}

// ─── Accessor table ──────────────────────────────────────────────────────────

pub type Getter<C> = fn(&C) -> FieldValue;
pub type Setter<C> = fn(&mut C, FieldValue);

struct Accessor<C> {
  name: &'static str,
  get:  Getter<C>,
  set:  Option<Setter<C>>,
}

/// An explicit field-name → accessor table for one entity type.
///
/// ```
/// use std::sync::LazyLock;
/// use mailup_core::contact::{AccessorTable, ContactRecord, FieldValue};
///
/// struct User { email: String, member_id: Option<i64> }
///
/// static USER_FIELDS: LazyLock<AccessorTable<User>> = LazyLock::new(|| {
///   AccessorTable::<User>::new()
///     .read("email", |u| u.email.as_str().into())
///     .read_write("memberId", |u| u.member_id.into(), |u, v| u.member_id = v.as_integer())
/// });
///
/// impl ContactRecord for User {
///   fn get_field(&self, name: &str) -> mailup_core::Result<FieldValue> {
///     USER_FIELDS.get(self, name)
///   }
///   fn set_field(&mut self, name: &str, value: FieldValue) -> mailup_core::Result<()> {
///     USER_FIELDS.set(self, name, value)
///   }
///   fn check_writable(&self, name: &str) -> mailup_core::Result<()> {
///     USER_FIELDS.check_writable(name)
///   }
/// }
/// ```
pub struct AccessorTable<C> {
  accessors: Vec<Accessor<C>>,
}

impl<C> Default for AccessorTable<C> {
  fn default() -> Self { Self { accessors: Vec::new() } }
}

impl<C> AccessorTable<C> {
  pub fn new() -> Self { Self::default() }

  /// Register a read-only field. A later registration under the same name
  /// replaces the earlier one.
  pub fn read(self, name: &'static str, get: Getter<C>) -> Self {
    self.insert(Accessor { name, get, set: None })
  }

  /// Register a field that can be both read and written.
  pub fn read_write(
    self,
    name: &'static str,
    get: Getter<C>,
    set: Setter<C>,
  ) -> Self {
    self.insert(Accessor { name, get, set: Some(set) })
  }

  fn insert(mut self, accessor: Accessor<C>) -> Self {
    self.accessors.retain(|a| a.name != accessor.name);
    self.accessors.push(accessor);
    self
  }

  fn find(&self, name: &str) -> Option<&Accessor<C>> {
    self.accessors.iter().find(|a| a.name == name)
  }

  /// Fails with [`Error::FieldAccess`] unless `name` has a setter.
  pub fn check_writable(&self, name: &str) -> Result<()> {
    self.setter(name).map(|_| ())
  }

  fn setter(&self, name: &str) -> Result<Setter<C>> {
    self
      .find(name)
      .and_then(|a| a.set)
      .ok_or_else(|| Error::field_access(name))
  }

  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.accessors.iter().map(|a| a.name)
  }

  pub fn get(&self, contact: &C, name: &str) -> Result<FieldValue> {
    self
      .find(name)
      .map(|a| (a.get)(contact))
      .ok_or_else(|| Error::field_access(name))
  }

  /// Write `value` through the setter registered for `name`. Read-only and
  /// unknown fields both fail with [`Error::FieldAccess`].
  pub fn set(&self, contact: &mut C, name: &str, value: FieldValue) -> Result<()> {
    let set = self.setter(name)?;
    set(contact, value);
    Ok(())
  }
}

// ─── Map-backed contact ──────────────────────────────────────────────────────

/// A contact whose exposed fields are fixed when it is built.
///
/// Reading or writing a name that was not declared fails exactly like a
/// typed entity without that accessor would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicContact {
  fields: BTreeMap<String, FieldValue>,
}

impl DynamicContact {
  pub fn new() -> Self { Self::default() }

  /// Declare `name` and give it an initial value.
  pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
    self.fields.insert(name.into(), value.into());
    self
  }

  pub fn fields(&self) -> &BTreeMap<String, FieldValue> { &self.fields }
}

impl FromIterator<(String, FieldValue)> for DynamicContact {
  fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
    Self { fields: iter.into_iter().collect() }
  }
}

impl ContactRecord for DynamicContact {
  fn get_field(&self, name: &str) -> Result<FieldValue> {
    self
      .fields
      .get(name)
      .cloned()
      .ok_or_else(|| Error::field_access(name))
  }

  fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
    let slot = self
      .fields
      .get_mut(name)
      .ok_or_else(|| Error::field_access(name))?;
    *slot = value;
    Ok(())
  }

  fn check_writable(&self, name: &str) -> Result<()> {
    if self.fields.contains_key(name) {
      Ok(())
    } else {
      Err(Error::field_access(name))
    }
  }
}

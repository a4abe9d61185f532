//! The `RemoteClient` trait and the values it exchanges.
//!
//! The trait mirrors the marketing API surface one call at a time. It is
//! implemented by an HTTP client outside this workspace; retries, timeouts
//! and transport errors are entirely its business.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Identifiers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

/// The identifier the remote system assigns to a subscribed contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteContactId(pub i64);

impl RemoteContactId {
  /// Parse a raw subscribe response body. Surrounding whitespace is ignored.
  pub fn parse(raw: &str) -> Result<Self> {
    raw
      .trim()
      .parse()
      .map(Self)
      .map_err(|_| Error::InvalidRemoteId(raw.to_owned()))
  }
}

macro_rules! display_inner {
  ($($ty:ty),*) => {$(
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
      }
    }

    impl From<i64> for $ty {
      fn from(id: i64) -> Self { Self(id) }
    }
  )*};
}

display_inner!(ListId, GroupId, RemoteContactId);

// ─── Listings ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
  pub id:   ListId,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
  pub id:   GroupId,
  pub name: String,
}

/// Whatever the remote answers for unsubscribe and export calls. The adapter
/// passes it through without interpreting it.
pub type RemoteStatus = serde_json::Value;

// ─── Session ─────────────────────────────────────────────────────────────────

/// A bearer token issued by the remote login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
  pub value:      String,
  /// Expiry as reported by the remote, when it reports one. Informational
  /// only: validity is always re-checked through [`RemoteClient::check_token`].
  pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
  pub fn new(value: impl Into<String>) -> Self {
    Self { value: value.into(), expires_at: None }
  }
}

impl fmt::Debug for AccessToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AccessToken")
      .field("value", &"<redacted>")
      .field("expires_at", &self.expires_at)
      .finish()
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// The marketing API as the adapter sees it.
///
/// Methods take `&self`; implementations that hold a token keep it behind
/// interior mutability. Payload arguments are already-serialized JSON.
pub trait RemoteClient {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether the token currently held by the client is still accepted.
  fn check_token(&self) -> Result<bool, Self::Error>;

  /// Full login round trip with resource-owner credentials.
  fn retrieve_access_token(
    &self,
    username: &str,
    password: &str,
  ) -> Result<AccessToken, Self::Error>;

  /// The token the client currently holds.
  fn access_token(&self) -> Result<AccessToken, Self::Error>;

  fn lists(&self) -> Result<Vec<ListSummary>, Self::Error>;

  fn groups(&self, list_id: ListId) -> Result<Vec<GroupSummary>, Self::Error>;

  /// Returns the raw response body, which carries the remote contact id.
  fn subscribe_to_list(
    &self,
    payload: &str,
    list_id: ListId,
  ) -> Result<String, Self::Error>;

  /// Subscribes to the group and to the list that owns it. Returns the raw
  /// response body, which carries the remote contact id.
  fn subscribe_to_group(
    &self,
    payload: &str,
    group_id: GroupId,
  ) -> Result<String, Self::Error>;

  /// Removes the contact from the group only; list membership is kept.
  fn unsubscribe_from_group(
    &self,
    remote_id: RemoteContactId,
    group_id: GroupId,
  ) -> Result<RemoteStatus, Self::Error>;

  fn unsubscribe_from_list(
    &self,
    remote_id: RemoteContactId,
    list_id: ListId,
  ) -> Result<RemoteStatus, Self::Error>;

  /// Import a JSON array of subscription requests into a group in one call.
  fn bulk_group_export(
    &self,
    batch: &str,
    group_id: GroupId,
  ) -> Result<RemoteStatus, Self::Error>;
}

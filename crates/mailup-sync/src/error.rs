//! Error type for `mailup-sync`.

use std::fmt;

use mailup_core::remote::RemoteContactId;
use thiserror::Error;

use crate::ListSelector;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The remote call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  CheckToken,
  AccessToken,
  GetLists,
  GetGroups,
  SubscribeToList,
  SubscribeToGroup,
  UnsubscribeFromGroup,
  UnsubscribeFromList,
  BulkGroupExport,
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::CheckToken => "check_token",
      Self::AccessToken => "access_token",
      Self::GetLists => "get_lists",
      Self::GetGroups => "get_groups",
      Self::SubscribeToList => "subscribe_to_list",
      Self::SubscribeToGroup => "subscribe_to_group",
      Self::UnsubscribeFromGroup => "unsubscribe_from_group",
      Self::UnsubscribeFromList => "unsubscribe_from_list",
      Self::BulkGroupExport => "bulk_group_export",
    })
  }
}

#[derive(Debug, Error)]
pub enum Error {
  /// The remote rejected the username/password exchange.
  #[error("authentication rejected: {0}")]
  Auth(#[source] BoxError),

  #[error("no list matches {0}")]
  ListNotFound(ListSelector),

  /// Unsubscribe was requested for a contact that was never subscribed.
  #[error("contact has no remote id in field {field:?}")]
  NotSubscribed { field: String },

  #[error("remote {operation} failed: {source}")]
  RemoteOperation {
    operation: Operation,
    #[source]
    source:    BoxError,
  },

  /// The remote side already holds the subscription; the local entity
  /// carries `remote_id` in memory but was not persisted.
  #[error("remote contact {remote_id} subscribed but local commit failed: {source}")]
  CommitFailed {
    remote_id: RemoteContactId,
    #[source]
    source:    BoxError,
  },

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  #[error(transparent)]
  Core(#[from] mailup_core::Error),
}

impl Error {
  pub(crate) fn remote<E>(operation: Operation, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::RemoteOperation { operation, source: Box::new(source) }
  }

  /// `true` when the contact lacked an accessor for a configured field.
  pub fn is_field_access(&self) -> bool {
    matches!(self, Self::Core(mailup_core::Error::FieldAccess { .. }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

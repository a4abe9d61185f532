//! [`ContactSyncAdapter`] — the operations the rest of the application calls.

use mailup_core::{
  config::{AdapterConfig, Credentials},
  contact::{ContactRecord, FieldValue},
  persist::Persistence,
  remote::{
    AccessToken, GroupId, GroupSummary, ListId, ListSummary, RemoteClient,
    RemoteContactId, RemoteStatus,
  },
};
use mailup_payload::{FieldMapper, SubscriptionRequest};
use tracing::{debug, info, warn};

use crate::{Error, ListSelector, Operation, Result, SessionManager};

/// One-way push of local contacts into remote lists and groups.
///
/// Both collaborators are injected at construction. The adapter holds no
/// state besides the cached session token, so every method takes `&self`.
pub struct ContactSyncAdapter<R, P> {
  client:          R,
  persistence:     P,
  credentials:     Credentials,
  session:         SessionManager,
  mapper:          FieldMapper,
  remote_id_field: String,
}

impl<R, P> ContactSyncAdapter<R, P>
where
  R: RemoteClient,
  P: Persistence,
{
  pub fn new(config: AdapterConfig, client: R, persistence: P) -> Self {
    Self {
      session: SessionManager::new(&config.credentials),
      mapper: FieldMapper::from_config(&config),
      remote_id_field: config.remote_id_field,
      credentials: config.credentials,
      client,
      persistence,
    }
  }

  pub fn client(&self) -> &R { &self.client }

  pub fn persistence(&self) -> &P { &self.persistence }

  /// Client registration and login, for callers that construct the remote
  /// client from the same configuration.
  pub fn credentials(&self) -> &Credentials { &self.credentials }

  pub fn mapper(&self) -> &FieldMapper { &self.mapper }

  pub fn session(&self) -> &SessionManager { &self.session }

  /// Make sure the client holds a valid token. Every other operation calls
  /// this first.
  pub fn ensure_token(&self) -> Result<AccessToken> {
    self.session.ensure_token(&self.client)
  }

  // ── Listings ──────────────────────────────────────────────────────────────

  /// All remote lists, in the order the remote returns them.
  pub fn lists(&self) -> Result<Vec<ListSummary>> {
    self.ensure_token()?;
    self.fetch_lists()
  }

  /// Groups under `list_id`, in the order the remote returns them.
  pub fn groups(&self, list_id: ListId) -> Result<Vec<GroupSummary>> {
    self.ensure_token()?;
    self
      .client
      .groups(list_id)
      .map_err(|e| Error::remote(Operation::GetGroups, e))
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────

  /// Subscribe `contact` to the list picked by `selector` and store the
  /// returned remote id on the contact.
  ///
  /// Selector resolution happens after the payload is built, so a contact
  /// with a missing field never costs a list lookup.
  pub fn subscribe_to_list<C>(
    &self,
    contact: &mut C,
    selector: impl Into<ListSelector>,
  ) -> Result<RemoteContactId>
  where
    C: ContactRecord + ?Sized,
  {
    let selector = selector.into();
    self.ensure_token()?;
    let payload = self.prepare(contact)?;
    let list_id = self.resolve_list(&selector)?;

    let raw = self
      .client
      .subscribe_to_list(&payload, list_id)
      .map_err(|e| Error::remote(Operation::SubscribeToList, e))?;
    let remote_id = self.record_remote_id(contact, &raw)?;

    info!(%list_id, %remote_id, "contact subscribed to list");
    Ok(remote_id)
  }

  /// Subscribe `contact` to a group (and, remotely, to its parent list) and
  /// store the returned remote id on the contact.
  pub fn subscribe_to_group<C>(
    &self,
    contact: &mut C,
    group_id: GroupId,
  ) -> Result<RemoteContactId>
  where
    C: ContactRecord + ?Sized,
  {
    self.ensure_token()?;
    let payload = self.prepare(contact)?;

    let raw = self
      .client
      .subscribe_to_group(&payload, group_id)
      .map_err(|e| Error::remote(Operation::SubscribeToGroup, e))?;
    let remote_id = self.record_remote_id(contact, &raw)?;

    info!(%group_id, %remote_id, "contact subscribed to group");
    Ok(remote_id)
  }

  /// Remove `contact` from a group; list membership is untouched. The local
  /// remote id is left as it is.
  pub fn unsubscribe_from_group<C>(&self, contact: &C, group_id: GroupId) -> Result<RemoteStatus>
  where
    C: ContactRecord + ?Sized,
  {
    self.ensure_token()?;
    let remote_id = self.remote_id_of(contact)?;

    let status = self
      .client
      .unsubscribe_from_group(remote_id, group_id)
      .map_err(|e| Error::remote(Operation::UnsubscribeFromGroup, e))?;
    info!(%group_id, %remote_id, "contact unsubscribed from group");
    Ok(status)
  }

  /// Remove `contact` from a list. The local remote id is left as it is.
  pub fn unsubscribe_from_list<C>(&self, contact: &C, list_id: ListId) -> Result<RemoteStatus>
  where
    C: ContactRecord + ?Sized,
  {
    self.ensure_token()?;
    let remote_id = self.remote_id_of(contact)?;

    let status = self
      .client
      .unsubscribe_from_list(remote_id, list_id)
      .map_err(|e| Error::remote(Operation::UnsubscribeFromList, e))?;
    info!(%list_id, %remote_id, "contact unsubscribed from list");
    Ok(status)
  }

  // ── Bulk ──────────────────────────────────────────────────────────────────

  /// Import every contact into `group_id` with a single remote call.
  ///
  /// Contacts are mapped in descriptor shape regardless of the configured
  /// shape and the batch is serialized as one JSON array. Nothing is written
  /// back to the contacts.
  pub fn bulk_group_export<'a, C, I>(&self, group_id: GroupId, contacts: I) -> Result<RemoteStatus>
  where
    C: ContactRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
  {
    self.ensure_token()?;
    let batch = self.mapper.build_batch(contacts)?;
    let body = SubscriptionRequest::batch_to_json(&batch)?;

    let status = self
      .client
      .bulk_group_export(&body, group_id)
      .map_err(|e| Error::remote(Operation::BulkGroupExport, e))?;
    info!(%group_id, contacts = batch.len(), "bulk export sent");
    Ok(status)
  }

  // ── Internals ─────────────────────────────────────────────────────────────

  fn fetch_lists(&self) -> Result<Vec<ListSummary>> {
    self
      .client
      .lists()
      .map_err(|e| Error::remote(Operation::GetLists, e))
  }

  /// Build the serialized payload and check that the remote id can be
  /// written back, before anything is sent.
  fn prepare<C: ContactRecord + ?Sized>(&self, contact: &C) -> Result<String> {
    let request = self.mapper.build(contact)?;
    contact.check_writable(&self.remote_id_field)?;
    Ok(request.to_json()?)
  }

  fn resolve_list(&self, selector: &ListSelector) -> Result<ListId> {
    if let ListSelector::Id(id) = selector {
      return Ok(*id);
    }
    let lists = self.fetch_lists()?;
    let id = selector
      .resolve(&lists)
      .ok_or_else(|| Error::ListNotFound(selector.clone()))?;
    debug!(%selector, list_id = %id, "resolved list selector");
    Ok(id)
  }

  fn record_remote_id<C: ContactRecord + ?Sized>(
    &self,
    contact: &mut C,
    raw: &str,
  ) -> Result<RemoteContactId> {
    let remote_id = RemoteContactId::parse(raw)?;
    contact.set_field(&self.remote_id_field, FieldValue::Integer(remote_id.0))?;

    let committed = self
      .persistence
      .commit()
      .and_then(|()| self.persistence.detach());
    if let Err(e) = committed {
      warn!(%remote_id, error = %e, "remote subscription succeeded but local commit failed");
      return Err(Error::CommitFailed { remote_id, source: Box::new(e) });
    }
    Ok(remote_id)
  }

  fn remote_id_of<C: ContactRecord + ?Sized>(&self, contact: &C) -> Result<RemoteContactId> {
    let value = contact.get_field(&self.remote_id_field)?;
    if value.is_blank() {
      return Err(Error::NotSubscribed { field: self.remote_id_field.clone() });
    }
    let id = value
      .as_integer()
      .ok_or_else(|| mailup_core::Error::InvalidRemoteId(value.to_string()))?;
    Ok(RemoteContactId(id))
  }
}

impl<R, P> std::fmt::Debug for ContactSyncAdapter<R, P> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ContactSyncAdapter")
      .field("credentials", &self.credentials)
      .field("session", &self.session)
      .field("mapper", &self.mapper)
      .field("remote_id_field", &self.remote_id_field)
      .finish_non_exhaustive()
  }
}

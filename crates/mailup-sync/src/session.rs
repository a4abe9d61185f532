//! Access-token reuse and refresh.

use std::sync::{Mutex, PoisonError};

use mailup_core::{
  config::Credentials,
  remote::{AccessToken, RemoteClient},
};
use tracing::debug;

use crate::{Error, Operation, Result};

/// Decides, before every adapter operation, whether the cached token can be
/// reused or a fresh login is needed.
///
/// No local expiry clock is kept: the remote client is asked every time.
/// The cache lock is held across check-then-refresh, so concurrent callers
/// trigger at most one login per invalidation.
pub struct SessionManager {
  username: String,
  password: String,
  cached:   Mutex<Option<AccessToken>>,
}

impl SessionManager {
  pub fn new(credentials: &Credentials) -> Self {
    Self {
      username: credentials.username.clone(),
      password: credentials.password.clone(),
      cached:   Mutex::new(None),
    }
  }

  /// Return a token the remote currently accepts, logging in if needed.
  pub fn ensure_token<R: RemoteClient + ?Sized>(&self, client: &R) -> Result<AccessToken> {
    let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

    let valid = client
      .check_token()
      .map_err(|e| Error::remote(Operation::CheckToken, e))?;

    if valid {
      if let Some(token) = cached.as_ref() {
        debug!("reusing cached access token");
        return Ok(token.clone());
      }
      let token = client
        .access_token()
        .map_err(|e| Error::remote(Operation::AccessToken, e))?;
      debug!("adopting access token already held by client");
      *cached = Some(token.clone());
      return Ok(token);
    }

    *cached = None;
    debug!(username = %self.username, "access token missing or rejected, logging in");
    let token = client
      .retrieve_access_token(&self.username, &self.password)
      .map_err(|e| Error::Auth(Box::new(e)))?;
    *cached = Some(token.clone());
    Ok(token)
  }

  /// The last token handed out, without contacting the remote.
  pub fn cached_token(&self) -> Option<AccessToken> {
    self
      .cached
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  /// Forget the cached token.
  pub fn invalidate(&self) {
    *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = None;
  }
}

impl std::fmt::Debug for SessionManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionManager")
      .field("username", &self.username)
      .field("cached", &self.cached_token())
      .finish_non_exhaustive()
  }
}

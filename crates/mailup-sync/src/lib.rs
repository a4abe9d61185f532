//! Push local contacts to MailUp lists and groups.
//!
//! [`ContactSyncAdapter`] ties together the session handling in
//! [`session`], the payload builder from [`mailup_payload`] and an injected
//! [`RemoteClient`](mailup_core::remote::RemoteClient) /
//! [`Persistence`](mailup_core::persist::Persistence) pair. Every call is
//! synchronous and runs ensure-token → map → remote call → commit in order.

mod adapter;
mod selector;

pub mod error;
pub mod session;
pub mod settings;

pub use adapter::ContactSyncAdapter;
pub use error::{Error, Operation, Result};
pub use selector::ListSelector;
pub use session::SessionManager;

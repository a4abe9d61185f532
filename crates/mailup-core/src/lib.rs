//! Core types and trait definitions for the MailUp contact adapter.
//!
//! This crate is deliberately free of HTTP and persistence dependencies.
//! The remote marketing API and the local entity store are expressed as
//! traits ([`remote::RemoteClient`], [`persist::Persistence`]); the other
//! crates depend on these abstractions, never on a concrete backend.

pub mod config;
pub mod contact;
pub mod error;
pub mod field;
pub mod persist;
pub mod remote;

pub use error::{Error, Result};

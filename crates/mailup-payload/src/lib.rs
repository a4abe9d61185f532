//! Subscription payload builder for the MailUp adapter.
//!
//! Turns any [`ContactRecord`](mailup_core::contact::ContactRecord) into the
//! request body the remote subscribe and import endpoints expect. Pure
//! synchronous; no HTTP or persistence dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use mailup_core::{contact::DynamicContact, field::{FieldSpec, PayloadShape}};
//! use mailup_payload::FieldMapper;
//!
//! let mapper = FieldMapper::new("email", "name", vec![FieldSpec::new("city", 7)], PayloadShape::Descriptors);
//! let contact = DynamicContact::new().with("email", "a@b.com").with("name", "A").with("city", "");
//! let json = mapper.build(&contact).unwrap().to_json().unwrap();
//! println!("{json}");
//! ```

mod mapper;
mod request;

pub use mapper::{BLANK_PLACEHOLDER, FieldMapper};
pub use request::{FieldDescriptor, RequestFields, SubscriptionRequest};

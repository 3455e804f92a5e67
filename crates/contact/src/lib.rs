//! Contact/demo-request intake: normalization and validation.
//!
//! A submission is only ever turned into a [`ContactRequest`] through
//! [`ContactFields::into_request`], so every downstream consumer can rely on
//! trimmed fields, a non-empty name and message, a plausible email address
//! and a defaulted service label.

mod request;

pub use request::{ContactFields, ContactRequest, FieldError, DEFAULT_SERVICE, MIN_MESSAGE_LEN};

//! Wire format for the participant directory protocol.
//!
//! Directory messages are short text strings exchanged over the signaling
//! transport, carrying "this connection identifier claims this display name"
//! or "forget this identifier". The format is deliberately minimal:
//!
//! ```text
//! <identifier-as-decimal-string>:<payload>
//! ```
//!
//! The payload is either a display name or the reserved [`LEAVE_SENTINEL`].
//! Only the first `:` separates the fields, so display names may themselves
//! contain `:`.
//!
//! # Components
//!
//! - [`encode`] / [`decode`]: raw field-level codec (infallible decode)
//! - [`DirectoryMessage`] / [`DirectoryPayload`]: typed layer over the raw
//!   fields
//! - [`ProtocolError`]: the one way a typed parse can fail

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod directory;
mod error;

pub use directory::{DirectoryMessage, DirectoryPayload, LEAVE_SENTINEL, Uid, decode, encode};
pub use error::ProtocolError;

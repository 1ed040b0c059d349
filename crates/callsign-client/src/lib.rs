//! Client
//!
//! Action-based client state machine for participant directory
//! synchronization. Merges presence notifications from the media transport
//! and directory messages from the signaling transport into one
//! [`callsign_core::SessionState`].
//!
//! # Architecture
//!
//! The client is Sans-IO: it receives events ([`MediaEvent`],
//! [`SignalingEvent`]), mutates state through pure logic, and returns
//! actions ([`ClientAction`]) for the caller to execute against the real
//! transports. Sends are fire-and-forget; a failed action is logged by the
//! caller and never rolled back into client state.
//!
//! # Components
//!
//! - [`Client`]: top-level state machine (lifecycle, adapters, role toggle)
//! - [`MediaEvent`] / [`SignalingEvent`]: the two notification streams,
//!   kept as distinct types because their payloads and trigger semantics
//!   differ
//! - [`ClientAction`]: transport operations the caller must perform

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;
mod event;

pub use callsign_core::{ConnectionStatus, Role, SessionSnapshot, SessionState};
pub use callsign_proto::Uid;
pub use client::Client;
pub use error::ClientError;
pub use event::{ClientAction, MediaEvent, OfflineReason, SignalingEvent, TransportEvent};

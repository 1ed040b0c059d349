//! Session state for the participant directory protocol.
//!
//! One live session merges two independently-delivered views of "who is
//! here": the media transport's presence notifications (identifiers joining
//! and leaving) and the signaling transport's directory messages (display
//! names keyed by the same identifiers). [`SessionState`] is the canonical
//! in-memory result of that merge, owned by a single client instance and
//! mutated only through explicit operations.
//!
//! The directory is a superset, never a mirror, of presence: it may hold
//! names for audience members and for broadcasters whose departure was never
//! announced. A presence departure deliberately does not remove a directory
//! entry; only an explicit tombstone or a full [`SessionState::reset`] does.
//!
//! # Components
//!
//! - [`SessionState`]: participant table, presence list, local attributes
//! - [`SessionSnapshot`]: serializable read-only copy for rendering layers
//! - [`Role`] / [`ConnectionStatus`]: local session attributes

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod role;
mod state;

pub use role::Role;
pub use state::{ConnectionStatus, SessionSnapshot, SessionState};

//! Canonical session state and its mutation operations.
//!
//! All operations take `&mut self`; atomicity comes from single ownership.
//! Transport adapters hold a handle to one [`SessionState`] and are the only
//! writers, so a reader between operations always sees a fully-merged table,
//! never a half-applied update.

use std::collections::HashMap;

use callsign_proto::Uid;
use serde::{Deserialize, Serialize};

use crate::Role;

/// Whether the local participant is joined to the media session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// Not in a session.
    #[default]
    Disconnected,
    /// Media join succeeded; session is live.
    Connected,
}

/// In-memory state of one live session.
///
/// Holds the two independently-merged participant views plus the local
/// session attributes:
///
/// - the *directory*: identifier to claimed display name, last-write-wins,
///   removed only by tombstone or [`SessionState::reset`]
/// - the *presence list*: identifiers currently connected as broadcasters,
///   in arrival order, maintained solely by media notifications
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Local connection identifier. Chosen before joining; replaced by the
    /// transport-assigned value once the join succeeds.
    local_uid: Uid,
    /// Local display name. Empty until a session is started.
    display_name: String,
    /// Local role.
    role: Role,
    /// Media connection status.
    status: ConnectionStatus,
    /// Channel name for both transports.
    channel: String,
    /// Broadcaster peers currently present, in arrival order.
    presence: Vec<Uid>,
    /// Claimed display names by identifier.
    directory: HashMap<Uid, String>,
}

impl SessionState {
    /// Create state for a session on `channel` with a locally chosen
    /// identifier. Starts disconnected, with an empty directory and
    /// presence list and the default broadcaster role.
    pub fn new(channel: impl Into<String>, local_uid: Uid) -> Self {
        Self {
            local_uid,
            display_name: String::new(),
            role: Role::default(),
            status: ConnectionStatus::default(),
            channel: channel.into(),
            presence: Vec::new(),
            directory: HashMap::new(),
        }
    }

    /// Insert or overwrite the directory entry for `uid` (last-write-wins).
    pub fn upsert_entry(&mut self, uid: Uid, name: impl Into<String>) {
        self.directory.insert(uid, name.into());
    }

    /// Remove the directory entry for `uid`. Idempotent; removing an absent
    /// entry is a no-op. Never touches the presence list.
    pub fn remove_entry(&mut self, uid: Uid) {
        self.directory.remove(&uid);
    }

    /// Record `uid` as present. Deduplicated: a repeat join notification
    /// for an already-present identifier is a no-op.
    pub fn add_presence(&mut self, uid: Uid) {
        if !self.presence.contains(&uid) {
            self.presence.push(uid);
        }
    }

    /// Record `uid` as departed. Idempotent; never touches the directory,
    /// so a name announced by a departed peer stays until an explicit
    /// tombstone arrives.
    pub fn remove_presence(&mut self, uid: Uid) {
        self.presence.retain(|present| *present != uid);
    }

    /// Clear presence and directory in full and mark the session
    /// disconnected. Called exactly once per session end.
    pub fn reset(&mut self) {
        self.presence.clear();
        self.directory.clear();
        self.status = ConnectionStatus::Disconnected;
    }

    /// Set the local display name.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    /// Adopt the identifier assigned by the media transport. Takes
    /// precedence over the locally chosen value.
    pub fn adopt_uid(&mut self, uid: Uid) {
        self.local_uid = uid;
    }

    /// Mark the media connection live.
    pub fn mark_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
    }

    /// Set the local role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Local connection identifier.
    pub fn local_uid(&self) -> Uid {
        self.local_uid
    }

    /// Local display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Local role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Media connection status.
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Present broadcaster peers, in arrival order.
    pub fn presence(&self) -> &[Uid] {
        &self.presence
    }

    /// Claimed display names by identifier.
    pub fn directory(&self) -> &HashMap<Uid, String> {
        &self.directory
    }

    /// Claimed display name for `uid`, if any was announced.
    pub fn name_of(&self, uid: Uid) -> Option<&str> {
        self.directory.get(&uid).map(String::as_str)
    }

    /// Read-only copy of the full state for the rendering layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            role: self.role,
            local_uid: self.local_uid,
            display_name: self.display_name.clone(),
            channel: self.channel.clone(),
            presence: self.presence.clone(),
            directory: self.directory.clone(),
        }
    }
}

/// Self-consistent copy of [`SessionState`] at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Media connection status.
    pub status: ConnectionStatus,
    /// Local role.
    pub role: Role,
    /// Local connection identifier.
    pub local_uid: Uid,
    /// Local display name.
    pub display_name: String,
    /// Channel name.
    pub channel: String,
    /// Present broadcaster peers, in arrival order.
    pub presence: Vec<Uid>,
    /// Claimed display names by identifier.
    pub directory: HashMap<Uid, String>,
}

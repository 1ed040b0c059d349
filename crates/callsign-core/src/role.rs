//! Broadcaster/audience role.

use serde::{Deserialize, Serialize};

/// Client role within the media session.
///
/// The media transport only emits presence notifications for broadcaster
/// connections, so switching to [`Role::Audience`] removes the local
/// participant from peers' presence lists without touching any directory
/// entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Emits media; visible in peers' presence lists.
    #[default]
    Broadcaster,
    /// Receives only; invisible to media presence.
    Audience,
}

impl Role {
    /// The other role.
    pub fn opposite(self) -> Self {
        match self {
            Self::Broadcaster => Self::Audience,
            Self::Audience => Self::Broadcaster,
        }
    }
}

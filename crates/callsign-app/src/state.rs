//! Observable view types derived from session state.
//!
//! [`Roster`] is the participant list a renderer actually draws: the
//! presence and directory views partitioned into broadcasters and audience.
//! It contains no protocol detail, only identifiers and resolved names.

use callsign_core::{Role, SessionSnapshot};
use callsign_proto::Uid;
use serde::Serialize;

/// One participant row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Connection identifier.
    pub uid: Uid,
    /// Resolved display name. `None` when presence arrived before any
    /// directory message for this identifier.
    pub name: Option<String>,
}

/// Participant lists partitioned by role.
///
/// Broadcasters are the local participant (when broadcasting) plus every
/// identifier in the presence list, names resolved through the directory.
/// The audience is every directory entry with no presence, plus the local
/// participant when in the audience role. A departed broadcaster whose
/// tombstone never arrived therefore shows up in the audience list; the
/// directory deliberately outlives presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    /// Participants currently broadcasting.
    pub broadcasters: Vec<RosterEntry>,
    /// Participants known by name but not broadcasting.
    pub audience: Vec<RosterEntry>,
}

impl Roster {
    /// Partition a snapshot into broadcaster and audience lists.
    ///
    /// Presence order is preserved for broadcasters; audience entries are
    /// sorted by identifier for stable output.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let local = RosterEntry {
            uid: snapshot.local_uid,
            name: Some(snapshot.display_name.clone()),
        };

        let mut broadcasters = Vec::with_capacity(snapshot.presence.len() + 1);
        if snapshot.role == Role::Broadcaster {
            broadcasters.push(local.clone());
        }
        for &uid in &snapshot.presence {
            broadcasters.push(RosterEntry { uid, name: snapshot.directory.get(&uid).cloned() });
        }

        let mut audience: Vec<RosterEntry> = snapshot
            .directory
            .iter()
            .filter(|(uid, _)| !snapshot.presence.contains(uid) && **uid != snapshot.local_uid)
            .map(|(&uid, name)| RosterEntry { uid, name: Some(name.clone()) })
            .collect();
        audience.sort_by_key(|entry| entry.uid);
        if snapshot.role == Role::Audience {
            audience.insert(0, local);
        }

        Self { broadcasters, audience }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use callsign_core::ConnectionStatus;

    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            status: ConnectionStatus::Connected,
            role: Role::Broadcaster,
            local_uid: 5,
            display_name: "Bob".to_owned(),
            channel: "channel-x".to_owned(),
            presence: vec![42, 7],
            directory: HashMap::from([
                (42, "Alice".to_owned()),
                (77, "Carol".to_owned()),
                (9, "Dave".to_owned()),
            ]),
        }
    }

    #[test]
    fn local_broadcaster_listed_first() {
        let roster = Roster::from_snapshot(&snapshot());

        assert_eq!(roster.broadcasters[0], RosterEntry {
            uid: 5,
            name: Some("Bob".to_owned())
        });
    }

    #[test]
    fn presence_resolves_names_through_directory() {
        let roster = Roster::from_snapshot(&snapshot());

        assert_eq!(&roster.broadcasters[1..], &[
            RosterEntry { uid: 42, name: Some("Alice".to_owned()) },
            RosterEntry { uid: 7, name: None },
        ]);
    }

    #[test]
    fn audience_is_directory_minus_presence() {
        let roster = Roster::from_snapshot(&snapshot());

        assert_eq!(roster.audience, vec![
            RosterEntry { uid: 9, name: Some("Dave".to_owned()) },
            RosterEntry { uid: 77, name: Some("Carol".to_owned()) },
        ]);
    }

    #[test]
    fn audience_role_moves_local_participant() {
        let mut snapshot = snapshot();
        snapshot.role = Role::Audience;

        let roster = Roster::from_snapshot(&snapshot);

        assert!(roster.broadcasters.iter().all(|entry| entry.uid != 5));
        assert_eq!(roster.audience[0].uid, 5);
    }
}

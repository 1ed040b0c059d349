//! In-process model of both transports.
//!
//! `SimHub` plays the role of the media and signaling infrastructure for a
//! set of simulated participants. It mirrors the semantics the protocol
//! depends on: the media side only fans out presence for broadcaster-role
//! connections, the signaling side fans channel messages out to every other
//! subscriber and posts member-joined notifications to existing members,
//! and nothing is delivered until a test explicitly drains an inbox.

use std::collections::{BTreeMap, VecDeque};

use callsign_client::{ClientAction, MediaEvent, OfflineReason, SignalingEvent, TransportEvent};
use callsign_core::Role;
use callsign_proto::Uid;

/// One simulated participant's transport-side state.
#[derive(Debug, Default)]
struct Peer {
    /// Media channel currently joined, if any.
    media_channel: Option<String>,
    /// Media role.
    role: Role,
    /// Logged in to signaling.
    logged_in: bool,
    /// Signaling channel currently subscribed, if any.
    signaling_channel: Option<String>,
    /// Undelivered notifications, in delivery order.
    inbox: VecDeque<TransportEvent>,
}

/// Deterministic in-process model of the media and signaling transports.
///
/// Participants are keyed by their connection identifier; `BTreeMap` keeps
/// fan-out order deterministic. The hub honors requested identifiers (it
/// never auto-assigns), so `JoinSuccess` echoes the identifier the client
/// chose.
#[derive(Debug, Default)]
pub struct SimHub {
    peers: BTreeMap<Uid, Peer>,
    /// Virtual clock reported as `elapsed_ms`, advanced per media
    /// operation.
    clock_ms: u64,
}

impl SimHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant slot. Must be called before any operation
    /// for that identifier.
    pub fn register(&mut self, uid: Uid) {
        self.peers.entry(uid).or_default();
    }

    /// Execute a client action on behalf of `uid`.
    pub fn apply(&mut self, uid: Uid, action: ClientAction) {
        match action {
            ClientAction::JoinMedia { channel, .. } => self.join_media(uid, &channel),
            ClientAction::LeaveMedia => self.leave_media(uid),
            ClientAction::SetRole(role) => self.set_role(uid, role),
            ClientAction::Login { .. } => self.login(uid),
            ClientAction::JoinSignalingChannel { channel } => self.join_channel(uid, &channel),
            ClientAction::SendChannelMessage { channel, text } => {
                self.send_channel_message(uid, &channel, &text);
            },
            ClientAction::SendPeerMessage { peer, text } => self.send_peer_message(peer, &text),
            ClientAction::Logout => self.logout(uid),
        }
    }

    /// Join the media session on `channel`.
    ///
    /// Queues `JoinSuccess` plus one `UserJoined` per existing broadcaster
    /// for the joiner, and announces the joiner to every other member when
    /// it broadcasts.
    pub fn join_media(&mut self, uid: Uid, channel: &str) {
        self.clock_ms += 10;
        let elapsed_ms = self.clock_ms;

        let members = self.media_members(channel, uid);
        let broadcasters: Vec<Uid> = members
            .iter()
            .copied()
            .filter(|member| self.peers.get(member).is_some_and(|p| p.role == Role::Broadcaster))
            .collect();

        let joiner_broadcasts = {
            let peer = self.peers.entry(uid).or_default();
            peer.media_channel = Some(channel.to_owned());
            peer.role == Role::Broadcaster
        };

        tracing::debug!(uid, channel, "media join");
        self.push(uid, TransportEvent::Media(MediaEvent::JoinSuccess {
            channel: channel.to_owned(),
            uid,
            elapsed_ms,
        }));
        for broadcaster in broadcasters {
            self.push(
                uid,
                TransportEvent::Media(MediaEvent::UserJoined { uid: broadcaster, elapsed_ms }),
            );
        }
        if joiner_broadcasts {
            for member in members {
                self.push(member, TransportEvent::Media(MediaEvent::UserJoined {
                    uid,
                    elapsed_ms,
                }));
            }
        }
    }

    /// Leave the media session deliberately.
    pub fn leave_media(&mut self, uid: Uid) {
        self.depart_media(uid, OfflineReason::Quit);
    }

    /// Drop off the media session without a goodbye (connection loss).
    pub fn drop_media(&mut self, uid: Uid) {
        self.depart_media(uid, OfflineReason::Dropped);
    }

    /// Switch media role, announcing the presence change to other members.
    pub fn set_role(&mut self, uid: Uid, role: Role) {
        self.clock_ms += 10;
        let elapsed_ms = self.clock_ms;

        let Some(peer) = self.peers.get_mut(&uid) else { return };
        if peer.role == role {
            return;
        }
        peer.role = role;
        let Some(channel) = peer.media_channel.clone() else { return };

        let members = self.media_members(&channel, uid);
        for member in members {
            let event = match role {
                Role::Audience => MediaEvent::UserOffline {
                    uid,
                    reason: OfflineReason::BecameAudience,
                },
                Role::Broadcaster => MediaEvent::UserJoined { uid, elapsed_ms },
            };
            self.push(member, TransportEvent::Media(event));
        }
    }

    /// Log in to signaling.
    pub fn login(&mut self, uid: Uid) {
        if let Some(peer) = self.peers.get_mut(&uid) {
            peer.logged_in = true;
        }
    }

    /// Log out of signaling, dropping any channel subscription.
    pub fn logout(&mut self, uid: Uid) {
        if let Some(peer) = self.peers.get_mut(&uid) {
            peer.logged_in = false;
            peer.signaling_channel = None;
        }
    }

    /// Subscribe to the signaling channel, notifying existing members.
    pub fn join_channel(&mut self, uid: Uid, channel: &str) {
        let members = self.signaling_members(channel, uid);
        if let Some(peer) = self.peers.get_mut(&uid) {
            peer.signaling_channel = Some(channel.to_owned());
        }
        for member in members {
            self.push(member, TransportEvent::Signaling(SignalingEvent::MemberJoined { uid }));
        }
    }

    /// Deliver a channel-wide message to every other subscriber.
    pub fn send_channel_message(&mut self, sender: Uid, channel: &str, text: &str) {
        tracing::debug!(sender, channel, text, "channel message");
        for member in self.signaling_members(channel, sender) {
            self.push(member, TransportEvent::Signaling(SignalingEvent::ChannelMessage {
                text: text.to_owned(),
            }));
        }
    }

    /// Deliver a peer-targeted message.
    pub fn send_peer_message(&mut self, peer: Uid, text: &str) {
        if self.peers.get(&peer).is_some_and(|p| p.logged_in) {
            self.push(peer, TransportEvent::Signaling(SignalingEvent::PeerMessage {
                text: text.to_owned(),
            }));
        }
    }

    /// Pop the next undelivered notification for `uid`.
    pub fn next_event(&mut self, uid: Uid) -> Option<TransportEvent> {
        self.peers.get_mut(&uid).and_then(|peer| peer.inbox.pop_front())
    }

    /// Whether `uid` has undelivered notifications.
    pub fn has_pending(&self, uid: Uid) -> bool {
        self.peers.get(&uid).is_some_and(|peer| !peer.inbox.is_empty())
    }

    fn depart_media(&mut self, uid: Uid, reason: OfflineReason) {
        let Some(peer) = self.peers.get_mut(&uid) else { return };
        let Some(channel) = peer.media_channel.take() else { return };
        let was_broadcaster = peer.role == Role::Broadcaster;

        if was_broadcaster {
            for member in self.media_members(&channel, uid) {
                self.push(member, TransportEvent::Media(MediaEvent::UserOffline {
                    uid,
                    reason,
                }));
            }
        }
    }

    /// Media members of `channel` other than `except`, in identifier order.
    fn media_members(&self, channel: &str, except: Uid) -> Vec<Uid> {
        self.peers
            .iter()
            .filter(|(uid, peer)| {
                **uid != except && peer.media_channel.as_deref() == Some(channel)
            })
            .map(|(uid, _)| *uid)
            .collect()
    }

    /// Signaling subscribers of `channel` other than `except`, in
    /// identifier order.
    fn signaling_members(&self, channel: &str, except: Uid) -> Vec<Uid> {
        self.peers
            .iter()
            .filter(|(uid, peer)| {
                **uid != except && peer.signaling_channel.as_deref() == Some(channel)
            })
            .map(|(uid, _)| *uid)
            .collect()
    }

    fn push(&mut self, uid: Uid, event: TransportEvent) {
        if let Some(peer) = self.peers.get_mut(&uid) {
            peer.inbox.push_back(event);
        }
    }
}

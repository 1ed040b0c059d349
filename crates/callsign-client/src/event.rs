//! Client events and actions.

use callsign_core::Role;
use callsign_proto::Uid;

/// Notifications from the media transport.
///
/// The media transport only reports presence for broadcaster-role
/// connections, so joins and departures here describe exactly "currently
/// connected broadcasters other than the local participant".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Transport-level error. Non-fatal; logged without state change.
    Error {
        /// SDK error code.
        code: i32,
    },

    /// A broadcaster peer joined the media session.
    UserJoined {
        /// The peer's connection identifier.
        uid: Uid,
        /// Milliseconds since the local join call, as reported by the
        /// transport.
        elapsed_ms: u64,
    },

    /// A broadcaster peer left the media session.
    UserOffline {
        /// The peer's connection identifier.
        uid: Uid,
        /// Why the transport considers the peer gone.
        reason: OfflineReason,
    },

    /// The local join completed.
    JoinSuccess {
        /// Channel that was joined.
        channel: String,
        /// The identifier the transport assigned to this connection. May
        /// differ from the requested one (e.g. auto-assignment).
        uid: Uid,
        /// Milliseconds since the join call.
        elapsed_ms: u64,
    },
}

/// Why a peer left the media session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineReason {
    /// The peer left deliberately.
    Quit,
    /// The connection dropped without a goodbye.
    Dropped,
    /// The peer switched to the audience role and stopped broadcasting.
    BecameAudience,
}

/// Notifications from the signaling transport.
///
/// Distinct from [`MediaEvent`] on purpose: [`SignalingEvent::MemberJoined`]
/// is a *messaging-channel* subscription event, not media presence, and it
/// obliges the client to reply rather than to record anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalingEvent {
    /// A channel-wide directory message arrived.
    ChannelMessage {
        /// Raw wire text (`"<uid>:<payload>"`).
        text: String,
    },

    /// A peer-targeted directory message arrived.
    PeerMessage {
        /// Raw wire text (`"<uid>:<payload>"`).
        text: String,
    },

    /// Some identifier just subscribed to the messaging channel. The
    /// channel-wide announcement sent at session start races with later
    /// subscriptions; the client closes that race by answering with a
    /// peer-targeted announcement.
    MemberJoined {
        /// The subscriber's identifier.
        uid: Uid,
    },

    /// Transport-level error. Non-fatal; logged without state change.
    Error {
        /// SDK error code.
        code: i32,
    },
}

/// A notification from either transport.
///
/// Envelope used at the I/O boundary; the two streams stay distinct types
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// From the media transport.
    Media(MediaEvent),
    /// From the signaling transport.
    Signaling(SignalingEvent),
}

/// Transport operations the client asks the caller to perform.
///
/// Execution is fire-and-forget: the caller logs failures and never feeds
/// them back into client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientAction {
    /// Join the media session on `channel` with the locally chosen
    /// identifier.
    JoinMedia {
        /// Channel to join.
        channel: String,
        /// Requested connection identifier.
        uid: Uid,
    },

    /// Leave the media session.
    LeaveMedia,

    /// Switch the media client role.
    SetRole(Role),

    /// Log in to the signaling transport.
    Login {
        /// Local identifier to log in as.
        uid: Uid,
    },

    /// Subscribe to the signaling channel.
    JoinSignalingChannel {
        /// Channel to subscribe to.
        channel: String,
    },

    /// Send a channel-wide directory message.
    SendChannelMessage {
        /// Target channel.
        channel: String,
        /// Wire text.
        text: String,
    },

    /// Send a peer-targeted directory message.
    SendPeerMessage {
        /// Target identifier.
        peer: Uid,
        /// Wire text.
        text: String,
    },

    /// Log out of the signaling transport.
    Logout,
}

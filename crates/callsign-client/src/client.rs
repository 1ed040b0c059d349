//! Client state machine.
//!
//! The [`Client`] owns the session state and is the single writer to it.
//! Inbound notifications from both transports are serialized through
//! [`Client::handle_media`] and [`Client::handle_signaling`] on one logical
//! thread; the public lifecycle operations produce the outbound announcement
//! sequences.

use callsign_core::{SessionSnapshot, SessionState};
use callsign_proto::{DirectoryMessage, DirectoryPayload, Uid};

use crate::{
    error::ClientError,
    event::{ClientAction, MediaEvent, SignalingEvent, TransportEvent},
};

/// Participant directory client.
///
/// Pure state machine: events in, actions out, no I/O. The caller executes
/// the returned [`ClientAction`]s against the real transports and logs any
/// failure without feeding it back.
#[derive(Debug)]
pub struct Client {
    state: SessionState,
}

impl Client {
    /// Create a client for `channel` with a locally chosen identifier.
    ///
    /// The identifier is provisional: if the media transport assigns a
    /// different one, [`MediaEvent::JoinSuccess`] adopts it.
    pub fn new(channel: impl Into<String>, uid: Uid) -> Self {
        Self { state: SessionState::new(channel, uid) }
    }

    /// Start a session: join both transports and broadcast the local
    /// directory announcement.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyDisplayName`] when `display_name` is
    /// empty; no action is produced and no transport is touched.
    pub fn start_session(
        &mut self,
        display_name: &str,
    ) -> Result<Vec<ClientAction>, ClientError> {
        if display_name.is_empty() {
            return Err(ClientError::EmptyDisplayName);
        }
        self.state.set_display_name(display_name);

        let uid = self.state.local_uid();
        let channel = self.state.channel().to_owned();
        tracing::debug!(uid, channel = %channel, "starting session");

        Ok(vec![
            ClientAction::JoinMedia { channel: channel.clone(), uid },
            ClientAction::Login { uid },
            ClientAction::JoinSignalingChannel { channel: channel.clone() },
            ClientAction::SendChannelMessage {
                channel,
                text: DirectoryMessage::announce(uid, display_name).encode(),
            },
        ])
    }

    /// End the session: leave the media session, broadcast the tombstone,
    /// log out, and clear all local state.
    pub fn end_session(&mut self) -> Vec<ClientAction> {
        let uid = self.state.local_uid();
        let channel = self.state.channel().to_owned();
        tracing::debug!(uid, channel = %channel, "ending session");

        let actions = vec![
            ClientAction::LeaveMedia,
            ClientAction::SendChannelMessage {
                channel,
                text: DirectoryMessage::leave(uid).encode(),
            },
            ClientAction::Logout,
        ];
        self.state.reset();
        actions
    }

    /// Toggle between broadcaster and audience.
    ///
    /// The local role flips unconditionally; a transport failure to switch
    /// is logged by the caller and not surfaced back here. Role changes are
    /// orthogonal to the directory.
    pub fn toggle_role(&mut self) -> Vec<ClientAction> {
        let next = self.state.role().opposite();
        self.state.set_role(next);
        vec![ClientAction::SetRole(next)]
    }

    /// Process a notification from either transport.
    pub fn handle(&mut self, event: TransportEvent) -> Vec<ClientAction> {
        match event {
            TransportEvent::Media(event) => self.handle_media(event),
            TransportEvent::Signaling(event) => self.handle_signaling(event),
        }
    }

    /// Process a media transport notification.
    pub fn handle_media(&mut self, event: MediaEvent) -> Vec<ClientAction> {
        match event {
            MediaEvent::Error { code } => {
                tracing::warn!(code, "media transport error");
            },
            MediaEvent::UserJoined { uid, elapsed_ms } => {
                tracing::debug!(uid, elapsed_ms, "broadcaster joined");
                self.state.add_presence(uid);
            },
            MediaEvent::UserOffline { uid, reason } => {
                // Presence only. The directory entry survives until an
                // explicit tombstone arrives.
                tracing::debug!(uid, ?reason, "broadcaster offline");
                self.state.remove_presence(uid);
            },
            MediaEvent::JoinSuccess { channel, uid, elapsed_ms } => {
                tracing::debug!(channel = %channel, uid, elapsed_ms, "media join succeeded");
                self.state.adopt_uid(uid);
                self.state.mark_connected();
            },
        }
        vec![]
    }

    /// Process a signaling transport notification.
    pub fn handle_signaling(&mut self, event: SignalingEvent) -> Vec<ClientAction> {
        match event {
            SignalingEvent::ChannelMessage { text } => {
                match DirectoryMessage::parse(&text) {
                    Ok(message) => self.apply_channel_message(message),
                    Err(error) => {
                        tracing::warn!(%error, "dropping malformed directory message");
                    },
                }
                vec![]
            },
            SignalingEvent::PeerMessage { text } => {
                match DirectoryMessage::parse(&text) {
                    Ok(DirectoryMessage { uid, payload: DirectoryPayload::Name(name) }) => {
                        self.state.upsert_entry(uid, name);
                    },
                    Ok(DirectoryMessage { uid, payload: DirectoryPayload::Leave }) => {
                        // Leaves are always broadcast channel-wide; a
                        // peer-targeted tombstone violates the protocol.
                        tracing::warn!(uid, "ignoring peer-targeted tombstone");
                    },
                    Err(error) => {
                        tracing::warn!(%error, "dropping malformed peer directory message");
                    },
                }
                vec![]
            },
            SignalingEvent::MemberJoined { uid } => {
                // The session-start broadcast races with later channel
                // subscriptions; answer the new subscriber directly.
                let announce =
                    DirectoryMessage::announce(self.state.local_uid(), self.state.display_name());
                vec![ClientAction::SendPeerMessage { peer: uid, text: announce.encode() }]
            },
            SignalingEvent::Error { code } => {
                tracing::warn!(code, "signaling transport error");
                vec![]
            },
        }
    }

    fn apply_channel_message(&mut self, message: DirectoryMessage) {
        match message.payload {
            DirectoryPayload::Name(name) => self.state.upsert_entry(message.uid, name),
            DirectoryPayload::Leave => self.state.remove_entry(message.uid),
        }
    }

    /// Read-only copy of the session state for the rendering layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Direct read access to the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

//! Protocol-to-Application translation layer.
//!
//! The [`Bridge`] wraps the low-level [`callsign_client::Client`] and adapts
//! it to the high-level application lifecycle.
//!
//! # Responsibilities
//!
//! - Converts high-level [`crate::AppAction`] into client operations.
//! - Accumulates outgoing [`ClientAction`]s to be executed by the driver in
//!   the next I/O cycle.
//! - Converts client results back into [`crate::AppEvent`]s to update the
//!   view, publishing a fresh snapshot after every interaction.

use callsign_client::{Client, ClientAction, TransportEvent};
use callsign_proto::Uid;

use crate::{AppAction, AppEvent};

/// Bridge between App and Client protocol logic.
pub struct Bridge {
    client: Client,
    outgoing: Vec<ClientAction>,
}

impl Bridge {
    /// Create a new Bridge for `channel` with a locally chosen identifier.
    pub fn new(channel: impl Into<String>, uid: Uid) -> Self {
        Self { client: Client::new(channel, uid), outgoing: Vec::new() }
    }

    /// Local connection identifier (transport-assigned once joined).
    pub fn local_uid(&self) -> Uid {
        self.client.state().local_uid()
    }

    /// Process an App action and return resulting App events.
    pub fn process_app_action(&mut self, action: AppAction) -> Vec<AppEvent> {
        match action {
            AppAction::StartSession { display_name } => {
                match self.client.start_session(&display_name) {
                    Ok(actions) => {
                        self.outgoing.extend(actions);
                        vec![self.state_changed()]
                    },
                    Err(e) => vec![AppEvent::Error { message: e.to_string() }],
                }
            },
            AppAction::EndSession => {
                let actions = self.client.end_session();
                self.outgoing.extend(actions);
                vec![self.state_changed()]
            },
            AppAction::ToggleRole => {
                let actions = self.client.toggle_role();
                self.outgoing.extend(actions);
                vec![self.state_changed()]
            },
            AppAction::Render | AppAction::Quit => vec![],
        }
    }

    /// Handle a notification from either transport.
    pub fn handle_transport(&mut self, event: TransportEvent) -> Vec<AppEvent> {
        let actions = self.client.handle(event);
        self.outgoing.extend(actions);
        vec![self.state_changed()]
    }

    /// Take pending outgoing client actions.
    pub fn take_outgoing(&mut self) -> Vec<ClientAction> {
        std::mem::take(&mut self.outgoing)
    }

    /// Read access to the wrapped client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn state_changed(&self) -> AppEvent {
        AppEvent::StateChanged { snapshot: self.client.snapshot() }
    }
}

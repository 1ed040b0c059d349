//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the application completely decoupled from I/O and
//! protocol mechanics.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! It never talks to a transport; the [`crate::Bridge`] does that and feeds
//! fresh snapshots back in.

use callsign_core::{ConnectionStatus, SessionSnapshot};

use crate::{AppAction, AppEvent, Roster};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Latest session snapshot from the bridge.
    snapshot: SessionSnapshot,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App with empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::StartCall { display_name } => {
                vec![AppAction::StartSession { display_name }, AppAction::Render]
            },
            AppEvent::EndCall => vec![AppAction::EndSession, AppAction::Render],
            AppEvent::ToggleRole => vec![AppAction::ToggleRole, AppAction::Render],
            AppEvent::Quit => vec![AppAction::Quit],
            AppEvent::StateChanged { snapshot } => {
                self.snapshot = snapshot;
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Latest session snapshot.
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Whether the media session is live.
    pub fn is_connected(&self) -> bool {
        self.snapshot.status == ConnectionStatus::Connected
    }

    /// Participant lists for rendering.
    pub fn roster(&self) -> Roster {
        Roster::from_snapshot(&self.snapshot)
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` stands in for the platform media and signaling SDKs during
//! tests. It implements [`Driver`] so the same [`callsign_app::Runtime`]
//! orchestration code runs in both production and simulation: user events
//! come from a pre-scripted queue, transport operations execute against a
//! shared [`SimHub`], and notifications are drained from the hub inbox.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use callsign_app::{App, AppEvent, Driver};
use callsign_client::TransportEvent;
use callsign_core::Role;
use callsign_proto::Uid;

use crate::SimHub;

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Simulation driver for deterministic runtime testing.
///
/// Holds a script of user events that [`Driver::poll_event`] replays in
/// order. A scripted event is only released once the hub inbox for this
/// participant is empty, so every notification is processed before the
/// next user input fires. A script ending in [`AppEvent::Quit`] guarantees
/// [`callsign_app::Runtime::run`] terminates.
pub struct SimDriver {
    hub: Arc<Mutex<SimHub>>,
    uid: Uid,
    script: VecDeque<AppEvent>,
}

impl SimDriver {
    /// Create a driver for `uid`, registering it on the hub.
    pub fn new(hub: Arc<Mutex<SimHub>>, uid: Uid) -> Self {
        hub.lock().unwrap_or_else(PoisonError::into_inner).register(uid);
        Self { hub, uid, script: VecDeque::new() }
    }

    /// Append a user event to the script.
    pub fn push_event(&mut self, event: AppEvent) {
        self.script.push_back(event);
    }

    fn hub(&self) -> std::sync::MutexGuard<'_, SimHub> {
        self.hub.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        // Drain notifications before releasing the next scripted input.
        if self.hub().has_pending(self.uid) {
            return Ok(None);
        }
        Ok(self.script.pop_front())
    }

    async fn recv_notice(&mut self) -> Option<TransportEvent> {
        self.hub().next_event(self.uid)
    }

    async fn join_media(&mut self, channel: &str, _uid: Uid) -> Result<(), Self::Error> {
        self.hub().join_media(self.uid, channel);
        Ok(())
    }

    async fn leave_media(&mut self) -> Result<(), Self::Error> {
        self.hub().leave_media(self.uid);
        Ok(())
    }

    async fn set_role(&mut self, role: Role) -> Result<(), Self::Error> {
        self.hub().set_role(self.uid, role);
        Ok(())
    }

    async fn login(&mut self, _uid: Uid) -> Result<(), Self::Error> {
        self.hub().login(self.uid);
        Ok(())
    }

    async fn join_channel(&mut self, channel: &str) -> Result<(), Self::Error> {
        self.hub().join_channel(self.uid, channel);
        Ok(())
    }

    async fn send_channel_message(&mut self, channel: &str, text: &str) -> Result<(), Self::Error> {
        self.hub().send_channel_message(self.uid, channel, text);
        Ok(())
    }

    async fn send_peer_message(&mut self, peer: Uid, text: &str) -> Result<(), Self::Error> {
        self.hub().send_peer_message(peer, text);
        Ok(())
    }

    async fn logout(&mut self) -> Result<(), Self::Error> {
        self.hub().logout(self.uid);
        Ok(())
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        Ok(())
    }

    fn stop(&mut self) {}
}

//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: view-model state machine
//! - [`Bridge`]: protocol bridge to the directory client
//! - [`Driver`]: platform-specific transport I/O

use callsign_client::ClientAction;
use callsign_proto::Uid;

use crate::{App, AppAction, AppEvent, Bridge, Driver};

/// Generic runtime that orchestrates App, Bridge, and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    bridge: Bridge,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime for `channel` with a locally chosen identifier.
    pub fn new(driver: D, channel: impl Into<String>, uid: Uid) -> Self {
        Self { driver, app: App::new(), bridge: Bridge::new(channel, uid) }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Polls for user events from the driver
    /// 2. Receives transport notifications
    /// 3. Processes actions and events between App and Bridge
    /// 4. Executes outgoing client actions through the driver
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error outside of a
    /// transport send (sends are fire-and-forget and only logged).
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        if let Some(event) = self.driver.poll_event().await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        if let Some(notice) = self.driver.recv_notice().await {
            let events = self.bridge.handle_transport(notice);
            self.dispatch_outgoing().await;
            if self.process_bridge_events(events).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),

                    // Protocol operations go through the bridge
                    AppAction::StartSession { .. }
                    | AppAction::EndSession
                    | AppAction::ToggleRole => {
                        let events = self.bridge.process_app_action(action);
                        self.dispatch_outgoing().await;
                        for event in events {
                            let new_actions = self.app.handle(event);
                            pending_actions.extend(new_actions);
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Process events from Bridge back to App.
    async fn process_bridge_events(&mut self, events: Vec<AppEvent>) -> Result<bool, D::Error> {
        for event in events {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Execute all pending outgoing client actions through the driver.
    ///
    /// Sends are fire-and-forget: a failure is logged and the loop moves
    /// on; no local state is rolled back and nothing is retried.
    async fn dispatch_outgoing(&mut self) {
        for action in self.bridge.take_outgoing() {
            if let Err(error) = self.execute(action.clone()).await {
                tracing::warn!(%error, ?action, "transport operation failed");
            }
        }
    }

    async fn execute(&mut self, action: ClientAction) -> Result<(), D::Error> {
        match action {
            ClientAction::JoinMedia { channel, uid } => {
                self.driver.join_media(&channel, uid).await
            },
            ClientAction::LeaveMedia => self.driver.leave_media().await,
            ClientAction::SetRole(role) => self.driver.set_role(role).await,
            ClientAction::Login { uid } => self.driver.login(uid).await,
            ClientAction::JoinSignalingChannel { channel } => {
                self.driver.join_channel(&channel).await
            },
            ClientAction::SendChannelMessage { channel, text } => {
                self.driver.send_channel_message(&channel, &text).await
            },
            ClientAction::SendPeerMessage { peer, text } => {
                self.driver.send_peer_message(peer, &text).await
            },
            ClientAction::Logout => self.driver.logout().await,
        }
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Bridge
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}

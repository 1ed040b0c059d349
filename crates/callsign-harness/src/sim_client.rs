//! Scripted participant built from the real App and Bridge.
//!
//! `SimClient` wires an [`App`] and a [`Bridge`] to a [`SimHub`] without
//! going through the [`callsign_app::Runtime`] loop, so multi-party
//! scenarios can be stepped by hand and inspected between steps.

use callsign_app::{App, AppAction, AppEvent, Bridge, Roster};
use callsign_core::SessionSnapshot;
use callsign_proto::Uid;

use crate::SimHub;

/// A simulated participant: real App and Bridge, hub-backed transports.
pub struct SimClient {
    uid: Uid,
    app: App,
    bridge: Bridge,
}

impl SimClient {
    /// Create a participant on `channel` and register it on the hub.
    pub fn new(hub: &mut SimHub, channel: impl Into<String>, uid: Uid) -> Self {
        hub.register(uid);
        Self { uid, app: App::new(), bridge: Bridge::new(channel, uid) }
    }

    /// Locally chosen connection identifier.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Latest view snapshot.
    pub fn snapshot(&self) -> &SessionSnapshot {
        self.app.snapshot()
    }

    /// Participant lists as the view renders them.
    pub fn roster(&self) -> Roster {
        self.app.roster()
    }

    /// Transient status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.app.status_message()
    }

    /// Start a session with `display_name`.
    pub fn start_call(&mut self, hub: &mut SimHub, display_name: &str) {
        self.feed(hub, AppEvent::StartCall { display_name: display_name.to_owned() });
    }

    /// End the session gracefully.
    pub fn end_call(&mut self, hub: &mut SimHub) {
        self.feed(hub, AppEvent::EndCall);
    }

    /// Flip between broadcaster and audience.
    pub fn toggle_role(&mut self, hub: &mut SimHub) {
        self.feed(hub, AppEvent::ToggleRole);
    }

    /// Feed a user event through App and Bridge, executing any resulting
    /// transport operations against the hub.
    pub fn feed(&mut self, hub: &mut SimHub, event: AppEvent) {
        let actions = self.app.handle(event);
        for action in actions {
            match action {
                AppAction::StartSession { .. } | AppAction::EndSession | AppAction::ToggleRole => {
                    let events = self.bridge.process_app_action(action);
                    for event in events {
                        let _ = self.app.handle(event);
                    }
                },
                AppAction::Render | AppAction::Quit => {},
            }
        }
        self.flush(hub);
    }

    /// Drain this participant's inbox, feeding each notification through
    /// the bridge. Returns how many notifications were processed.
    pub fn pump(&mut self, hub: &mut SimHub) -> usize {
        let mut processed = 0;
        while let Some(notice) = hub.next_event(self.uid) {
            let events = self.bridge.handle_transport(notice);
            for event in events {
                let _ = self.app.handle(event);
            }
            self.flush(hub);
            processed += 1;
        }
        processed
    }

    fn flush(&mut self, hub: &mut SimHub) {
        for action in self.bridge.take_outgoing() {
            hub.apply(self.bridge.local_uid(), action);
        }
    }
}

/// Pump every participant until no inbox produces work.
///
/// Each round drains every inbox once; replies generated during a round
/// are picked up in the next. Terminates because the protocol generates a
/// bounded number of replies per delivered message.
pub fn settle(hub: &mut SimHub, clients: &mut [SimClient]) {
    loop {
        let mut processed = 0;
        for client in clients.iter_mut() {
            processed += client.pump(hub);
        }
        if processed == 0 {
            return;
        }
    }
}

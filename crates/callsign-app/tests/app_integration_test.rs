//! Integration tests for App and Bridge behavior.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - App state reflects the merged session state
//! - Outbound announcements are produced at the right moments
//! - Roster partitions are consistent with presence and directory

use callsign_app::{App, AppAction, AppEvent, Bridge};
use callsign_client::{ClientAction, MediaEvent, OfflineReason, SignalingEvent, TransportEvent};

/// Process actions from App through Bridge and update App state.
fn process_actions(app: &mut App, bridge: &mut Bridge, actions: Vec<AppAction>) -> Vec<ClientAction> {
    for action in actions {
        match action {
            AppAction::StartSession { .. } | AppAction::EndSession | AppAction::ToggleRole => {
                let events = bridge.process_app_action(action);
                for event in events {
                    let _ = app.handle(event);
                }
            },
            AppAction::Render | AppAction::Quit => {},
        }
    }

    bridge.take_outgoing()
}

/// Start a call using the App API and process through Bridge.
fn start_call(app: &mut App, bridge: &mut Bridge, name: &str) -> Vec<ClientAction> {
    let actions = app.handle(AppEvent::StartCall { display_name: name.to_owned() });
    process_actions(app, bridge, actions)
}

/// End the call using the App API and process through Bridge.
fn end_call(app: &mut App, bridge: &mut Bridge) -> Vec<ClientAction> {
    let actions = app.handle(AppEvent::EndCall);
    process_actions(app, bridge, actions)
}

/// Deliver a transport notification and update App state.
fn receive(app: &mut App, bridge: &mut Bridge, event: TransportEvent) -> Vec<ClientAction> {
    let events = bridge.handle_transport(event);
    for event in events {
        let _ = app.handle(event);
    }
    bridge.take_outgoing()
}

#[test]
fn start_call_announces_local_name_once() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);

    let outgoing = start_call(&mut app, &mut bridge, "Bob");

    let broadcasts: Vec<_> = outgoing
        .iter()
        .filter(|a| matches!(a, ClientAction::SendChannelMessage { .. }))
        .collect();
    assert_eq!(broadcasts, vec![&ClientAction::SendChannelMessage {
        channel: "channel-x".to_owned(),
        text: "5:Bob".to_owned(),
    }]);
}

#[test]
fn empty_name_surfaces_error_without_transport_calls() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);

    let outgoing = start_call(&mut app, &mut bridge, "");

    assert!(outgoing.is_empty());
    assert_eq!(app.status_message(), Some("Error: display name must not be empty"));
}

#[test]
fn directory_and_presence_merge_into_roster() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);
    let _ = start_call(&mut app, &mut bridge, "Bob");

    let _ = receive(&mut app, &mut bridge, TransportEvent::Media(MediaEvent::JoinSuccess {
        channel: "channel-x".to_owned(),
        uid: 5,
        elapsed_ms: 20,
    }));
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Signaling(SignalingEvent::ChannelMessage { text: "42:Alice".to_owned() }),
    );
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Media(MediaEvent::UserJoined { uid: 42, elapsed_ms: 150 }),
    );
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Signaling(SignalingEvent::ChannelMessage { text: "77:Carol".to_owned() }),
    );

    assert!(app.is_connected());
    let roster = app.roster();
    assert_eq!(roster.broadcasters.len(), 2); // Bob + Alice
    assert_eq!(roster.audience.len(), 1); // Carol
    assert_eq!(roster.audience[0].name.as_deref(), Some("Carol"));
}

#[test]
fn member_joined_triggers_exactly_one_peer_reply() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);
    let _ = start_call(&mut app, &mut bridge, "Bob");

    let outgoing = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Signaling(SignalingEvent::MemberJoined { uid: 99 }),
    );

    assert_eq!(outgoing, vec![ClientAction::SendPeerMessage {
        peer: 99,
        text: "5:Bob".to_owned(),
    }]);
}

#[test]
fn offline_broadcaster_becomes_audience_in_roster() {
    // An ungraceful drop removes presence but not the name; the stale
    // entry shows up in the audience list until a tombstone arrives.
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);
    let _ = start_call(&mut app, &mut bridge, "Bob");
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Signaling(SignalingEvent::ChannelMessage { text: "42:Alice".to_owned() }),
    );
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Media(MediaEvent::UserJoined { uid: 42, elapsed_ms: 1 }),
    );

    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Media(MediaEvent::UserOffline { uid: 42, reason: OfflineReason::Dropped }),
    );

    let roster = app.roster();
    assert!(roster.broadcasters.iter().all(|entry| entry.uid != 42));
    assert_eq!(roster.audience[0].uid, 42);
}

#[test]
fn end_call_clears_view_and_sends_tombstone() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);
    let _ = start_call(&mut app, &mut bridge, "Bob");
    let _ = receive(
        &mut app,
        &mut bridge,
        TransportEvent::Signaling(SignalingEvent::ChannelMessage { text: "42:Alice".to_owned() }),
    );

    let outgoing = end_call(&mut app, &mut bridge);

    assert_eq!(outgoing, vec![
        ClientAction::LeaveMedia,
        ClientAction::SendChannelMessage {
            channel: "channel-x".to_owned(),
            text: "5:!leave".to_owned(),
        },
        ClientAction::Logout,
    ]);
    assert!(app.snapshot().directory.is_empty());
    assert!(!app.is_connected());
}

#[test]
fn toggle_role_requests_switch_and_updates_view() {
    let mut app = App::new();
    let mut bridge = Bridge::new("channel-x", 5);
    let _ = start_call(&mut app, &mut bridge, "Bob");

    let outgoing = {
        let actions = app.handle(AppEvent::ToggleRole);
        process_actions(&mut app, &mut bridge, actions)
    };

    assert_eq!(outgoing, vec![ClientAction::SetRole(callsign_client::Role::Audience)]);
    assert_eq!(app.snapshot().role, callsign_client::Role::Audience);
}

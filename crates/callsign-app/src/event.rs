//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User intents (start/end the call, toggle role, quit).
//! - Bridge outputs translated from the underlying client.

use callsign_core::SessionSnapshot;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User wants to start the call with this display name.
    StartCall {
        /// Display name to announce.
        display_name: String,
    },

    /// User wants to end the call.
    EndCall,

    /// User wants to switch between broadcaster and audience.
    ToggleRole,

    /// User wants to quit the application.
    Quit,

    /// The session state changed.
    StateChanged {
        /// Fresh read-only copy of the session state.
        snapshot: SessionSnapshot,
    },

    /// Error occurred.
    Error {
        /// Error description.
        message: String,
    },
}

//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Start a session.
    StartSession {
        /// Display name to announce.
        display_name: String,
    },

    /// End the session.
    EndSession,

    /// Toggle between broadcaster and audience.
    ToggleRole,
}

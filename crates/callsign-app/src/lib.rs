//! Application layer for callsign
//!
//! Pure state machines and a generic runtime for orchestrating the
//! directory-sync client against real transports, enabling deterministic
//! simulation testing with the same code that runs in production.
//!
//! # Components
//!
//! - [`App`]: view-model state machine (participant lists, status line)
//! - [`Bridge`]: wraps the protocol [`callsign_client::Client`] and
//!   translates between app actions and client actions
//! - [`Driver`]: trait for platform-specific transport I/O
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod driver;
mod event;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use bridge::Bridge;
pub use driver::Driver;
pub use event::AppEvent;
pub use runtime::Runtime;
pub use state::{Roster, RosterEntry};

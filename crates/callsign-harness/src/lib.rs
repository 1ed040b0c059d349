//! Deterministic simulation harness for directory sync testing.
//!
//! In-process implementations of both transport surfaces for deterministic,
//! reproducible testing of the participant directory protocol.
//!
//! # Components
//!
//! - [`SimHub`]: one shared model of the media and signaling transports,
//!   fanning notifications out to per-participant inboxes
//! - [`SimDriver`]: implements [`callsign_app::Driver`] over a shared hub so
//!   the production [`callsign_app::Runtime`] runs unchanged in simulation
//! - [`SimClient`]: App + Bridge pair wired to a hub for test-driven
//!   multi-client scenarios, with [`settle`] to pump until quiescent

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod hub;
pub mod sim_client;
pub mod sim_driver;

pub use hub::SimHub;
pub use sim_client::{SimClient, settle};
pub use sim_driver::{SimDriver, SimDriverError};

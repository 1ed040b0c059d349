//! Client error type.

use thiserror::Error;

/// Errors surfaced by [`crate::Client`] operations.
///
/// Transport-level failures never appear here: they arrive as error
/// notifications and are logged, and outbound sends are fire-and-forget.
/// The only locally-rejected operation is starting a session without a
/// display name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Session start requires a non-empty display name; no transport call
    /// is made when it is missing.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

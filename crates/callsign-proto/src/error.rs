//! Error type for the directory wire format.
//!
//! The raw codec never fails; only the typed layer can, and only when the
//! identifier field is not a decimal number. Receivers drop such messages
//! rather than treating them as fatal.

use thiserror::Error;

/// Errors that can occur when parsing a directory message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The identifier field is not a decimal connection identifier.
    #[error("invalid identifier field: {field:?}")]
    InvalidUid {
        /// The raw identifier field as received.
        field: String,
    },
}

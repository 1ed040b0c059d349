//! Directory message codec.
//!
//! Two layers: the raw [`encode`]/[`decode`] pair works on string fields and
//! never fails, while [`DirectoryMessage`] adds identifier parsing and the
//! tombstone distinction on top.

use crate::error::ProtocolError;

/// Participant identifier assigned per media-session connection.
///
/// Stable for the lifetime of one connection; a peer that leaves and rejoins
/// receives a new identifier.
pub type Uid = u32;

/// Reserved payload meaning "remove this identifier's directory entry".
pub const LEAVE_SENTINEL: &str = "!leave";

/// Field separator between identifier and payload.
const SEPARATOR: char = ':';

/// Encode an identifier and payload into wire text.
pub fn encode(uid: Uid, payload: &str) -> String {
    format!("{uid}{SEPARATOR}{payload}")
}

/// Split wire text into its identifier and payload fields.
///
/// Splits at the first separator only, so the payload may contain `:`.
/// Text without a separator decodes as an empty payload rather than an
/// error; receivers stay resilient to truncated messages.
pub fn decode(text: &str) -> (&str, &str) {
    match text.split_once(SEPARATOR) {
        Some((uid, payload)) => (uid, payload),
        None => (text, ""),
    }
}

/// Payload of a directory message.
///
/// Display names are not escaped on the wire, so a name equal to
/// [`LEAVE_SENTINEL`] is indistinguishable from a tombstone and will be
/// decoded as one by every receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryPayload {
    /// A claimed display name. May be empty when the sender's message was
    /// truncated in transit.
    Name(String),
    /// Tombstone: the sender has left and its entry should be removed.
    Leave,
}

impl DirectoryPayload {
    /// Interpret a raw payload field.
    pub fn from_wire(payload: &str) -> Self {
        if payload == LEAVE_SENTINEL {
            Self::Leave
        } else {
            Self::Name(payload.to_owned())
        }
    }

    /// The wire representation of this payload.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Leave => LEAVE_SENTINEL,
        }
    }
}

/// A parsed directory message: one identifier plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMessage {
    /// The connection identifier the payload applies to.
    pub uid: Uid,
    /// Name claim or tombstone.
    pub payload: DirectoryPayload,
}

impl DirectoryMessage {
    /// A name announcement for `uid`.
    pub fn announce(uid: Uid, name: impl Into<String>) -> Self {
        Self { uid, payload: DirectoryPayload::Name(name.into()) }
    }

    /// A tombstone for `uid`.
    pub fn leave(uid: Uid) -> Self {
        Self { uid, payload: DirectoryPayload::Leave }
    }

    /// Encode into wire text.
    pub fn encode(&self) -> String {
        encode(self.uid, self.payload.as_wire())
    }

    /// Parse wire text into a typed message.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidUid`] when the identifier field is
    /// not a decimal number. A missing separator is not an error: the
    /// payload is treated as empty.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let (uid_field, payload) = decode(text);
        let uid = uid_field
            .parse::<Uid>()
            .map_err(|_| ProtocolError::InvalidUid { field: uid_field.to_owned() })?;
        Ok(Self { uid, payload: DirectoryPayload::from_wire(payload) })
    }
}

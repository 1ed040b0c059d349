//! Property-based tests for the directory wire codec.
//!
//! These verify round-trip correctness for all identifiers and payloads,
//! not just specific examples.

use callsign_proto::{DirectoryMessage, DirectoryPayload, LEAVE_SENTINEL, decode, encode};
use proptest::prelude::*;

proptest! {
    /// Raw codec round-trip holds for any payload, including ones that
    /// contain the separator.
    #[test]
    fn raw_round_trip(uid in any::<u32>(), payload in ".*") {
        let wire = encode(uid, &payload);
        let (uid_field, payload_field) = decode(&wire);

        prop_assert_eq!(uid_field, uid.to_string());
        prop_assert_eq!(payload_field, payload);
    }

    /// Typed round-trip holds for any name that is not the tombstone
    /// sentinel.
    #[test]
    fn announce_round_trip(uid in any::<u32>(), name in ".*") {
        prop_assume!(name != LEAVE_SENTINEL);

        let message = DirectoryMessage::announce(uid, name.clone());
        let parsed = DirectoryMessage::parse(&message.encode());

        prop_assert_eq!(parsed, Ok(message));
    }

    /// Tombstones round-trip for every identifier.
    #[test]
    fn leave_round_trip(uid in any::<u32>()) {
        let parsed = DirectoryMessage::parse(&DirectoryMessage::leave(uid).encode());
        prop_assert_eq!(parsed, Ok(DirectoryMessage::leave(uid)));
    }

    /// Decoding never panics on arbitrary input, and any text with a
    /// numeric identifier field parses.
    #[test]
    fn parse_never_panics(text in ".*") {
        let _ = DirectoryMessage::parse(&text);
    }

    /// A parsed payload is a tombstone exactly when the payload field is
    /// the sentinel.
    #[test]
    fn tombstone_iff_sentinel(uid in any::<u32>(), payload in "[^:]*") {
        let parsed = DirectoryMessage::parse(&encode(uid, &payload));

        let expected = if payload == LEAVE_SENTINEL {
            DirectoryPayload::Leave
        } else {
            DirectoryPayload::Name(payload)
        };
        prop_assert_eq!(parsed.map(|m| m.payload), Ok(expected));
    }
}

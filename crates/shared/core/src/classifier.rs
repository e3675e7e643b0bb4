//! Message classification
//!
//! Classification only looks at the message type marker and never parses
//! the rest of the message. Anything unrecognised falls through to
//! [`TrafficCategory::Other`], which is always logged.

use crate::entities::TrafficCategory;

/// Prefix of the MsgType field
pub const MSG_TYPE_MARKER: &str = "35=";

/// The byte immediately following the first `35=` marker
///
/// Returns `None` when the marker is absent or ends the message.
/// FIX is single-byte encoded, so the key is read from raw bytes.
pub fn message_type_key(raw: &str) -> Option<u8> {
    let idx = raw.find(MSG_TYPE_MARKER)?;
    raw.as_bytes().get(idx + MSG_TYPE_MARKER.len()).copied()
}

/// Classify a raw wire message into its traffic category
pub fn classify(raw: &str) -> TrafficCategory {
    TrafficCategory::from_key(message_type_key(raw))
}

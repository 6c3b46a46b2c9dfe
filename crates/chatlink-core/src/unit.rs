//! Message units exchanged over the duplex channel.

use bytes::Bytes;

/// One discrete unit received from the peer.
///
/// Only text payloads carry chat content; everything else (binary data,
/// keepalive frames) arrives as `Frame` and is discarded by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// A text payload to show to the user.
    Text(String),
    /// A non-text frame, not meaningful to the session.
    Frame(Bytes),
}

impl Unit {
    /// The text content, if this is a text unit.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Frame(_) => None,
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

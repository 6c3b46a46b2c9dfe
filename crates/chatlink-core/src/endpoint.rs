//! Endpoint addressing for the duplex channel.

use std::fmt;

/// Address of the remote duplex channel: host, port and the path selecting
/// the channel on that host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Remote host name or address.
    pub host: String,
    /// Remote port.
    pub port: u16,
    /// Channel path, always with a leading slash.
    pub path: String,
}

impl Endpoint {
    /// Create a new endpoint. The path is normalized to carry a leading
    /// slash so `Display` always yields a valid URL.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self {
            host: host.into(),
            port,
            path,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ws://{}:{}{}", self.host, self.port, self.path)
    }
}

//! WebSocket transport for chatlink sessions.
//!
//! Provides:
//! - `WsTransport` - Opens WebSocket connections from an `Endpoint`
//! - `WsConnection` - One open connection, one concurrent reader + writer

pub mod websocket;

pub use websocket::{WsConnection, WsTransport};

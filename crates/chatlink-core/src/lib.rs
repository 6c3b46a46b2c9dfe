//! Core abstractions for duplex chat sessions.
//!
//! This crate provides the fundamental building blocks:
//! - `Unit` - One message unit received from the peer
//! - `Endpoint` - Host/port/path addressing for the duplex channel
//! - Connection, Transport and console traits

pub mod endpoint;
pub mod traits;
pub mod unit;

pub use endpoint::Endpoint;
pub use traits::{
    ConnectError, Connection, LineSource, OutputSink, ReceiveError, SendError, Transport,
};
pub use unit::Unit;

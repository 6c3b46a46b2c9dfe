//! Concurrent pumps and session coordination for duplex chat.
//!
//! Provides:
//! - `InboundPump` / `OutboundPump` - The two independent pump loops
//! - `SessionCoordinator` - Opens the connection, runs both pumps, closes
//! - Console implementations of the line source and output sink

pub mod console;
pub mod coordinator;
pub mod pump;

#[cfg(test)]
pub(crate) mod testutil;

pub use console::{ConsoleSink, StdinLines};
pub use coordinator::{SessionCoordinator, SessionError};
pub use pump::{EXIT_COMMAND, InboundPump, OutboundPump};

//! Core traits for the duplex connection and the console.

use std::io;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Endpoint, Unit};

/// Connection establishment error.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Connect failed: {0}")]
    Handshake(String),
}

/// Receive-side transport fault.
#[derive(Debug, Error)]
pub enum ReceiveError {
    #[error("Receive failed: {0}")]
    Transport(String),
}

/// Send-side transport fault.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Connection closed")]
    Closed,
    #[error("Send failed: {0}")]
    Transport(String),
}

/// One open duplex channel to the remote peer.
///
/// Safe for one concurrent reader and one concurrent writer; the session
/// layer never runs more than one of each.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Wait for the next inbound unit.
    ///
    /// Returns `Ok(None)` once the peer has closed the channel.
    ///
    /// # Errors
    /// Returns `ReceiveError` on a transport fault.
    async fn recv_next(&self) -> Result<Option<Unit>, ReceiveError>;

    /// Send one text payload, waiting until it is handed to the transport.
    ///
    /// # Errors
    /// Returns `SendError` on a closed or faulted connection.
    async fn send_text(&self, payload: &str) -> Result<(), SendError>;

    /// Close the channel and release transport resources.
    ///
    /// Idempotent; safe to call after either direction has already failed.
    async fn close(&self);
}

/// Trait for opening duplex channels.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The connection type this transport produces.
    type Conn: Connection + 'static;

    /// Establish the duplex channel to `endpoint`.
    ///
    /// # Errors
    /// Returns `ConnectError` on an unreachable host, refused connection
    /// or failed protocol negotiation.
    async fn open(&self, endpoint: &Endpoint) -> Result<Self::Conn, ConnectError>;
}

/// Line-oriented user-input source.
#[async_trait]
pub trait LineSource: Send {
    /// Wait for the next input line, without its trailing newline.
    ///
    /// Returns `Ok(None)` on end of input.
    ///
    /// # Errors
    /// Returns the underlying I/O error if reading fails.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for rendering inbound text to the user.
#[async_trait]
pub trait OutputSink: Send {
    /// Render one inbound text payload.
    ///
    /// # Errors
    /// Returns the underlying I/O error if writing fails.
    async fn render(&mut self, text: &str) -> io::Result<()>;
}

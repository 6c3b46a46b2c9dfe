//! Session coordinator: owns the connection and both pump lifetimes.

use std::sync::Arc;

use chatlink_core::{
    ConnectError, Connection, Endpoint, LineSource, OutputSink, SendError, Transport,
};
use tokio_util::sync::CancellationToken;

use crate::pump::{InboundPump, OutboundPump};

/// Terminal session failure.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error(transparent)]
    Send(#[from] SendError),
}

/// Runs one interactive session over one connection.
///
/// The coordinator moves through Idle, Connecting, Active, Draining and
/// Closed; the state is implicit in `run`'s progress, with each transition
/// logged. The connection is owned here for its whole lifetime; the pumps
/// only borrow it and never close it.
pub struct SessionCoordinator<T, I, O> {
    transport: T,
    input: I,
    sink: O,
}

impl<T, I, O> SessionCoordinator<T, I, O>
where
    T: Transport,
    I: LineSource + 'static,
    O: OutputSink + 'static,
{
    /// Create a coordinator over a transport and the two console ends.
    #[must_use]
    pub fn new(transport: T, input: I, sink: O) -> Self {
        Self {
            transport,
            input,
            sink,
        }
    }

    /// Run the session to completion.
    ///
    /// Opens the connection, runs both pumps concurrently, and tears down
    /// once the outbound pump finishes. The inbound pump finishing on its
    /// own (peer disconnect) does not end the session; the user may keep
    /// composing until their own send fails.
    ///
    /// # Errors
    /// Returns `SessionError::Connect` if the connection cannot be opened
    /// (no pumps are started and nothing is closed), or
    /// `SessionError::Send` if a send failure ended the session.
    pub async fn run(self, endpoint: &Endpoint) -> Result<(), SessionError> {
        tracing::debug!(%endpoint, "Connecting");
        let conn = Arc::new(self.transport.open(endpoint).await?);
        tracing::debug!("Session active");

        let cancel = CancellationToken::new();
        let inbound = tokio::spawn(
            InboundPump::new(Arc::clone(&conn), self.sink, cancel.clone()).run(),
        );
        let outbound = tokio::spawn(OutboundPump::new(Arc::clone(&conn), self.input).run());

        // Sole termination trigger: the outbound pump returning, by user
        // intent or by send failure. It is never cancelled from here.
        let outcome = match outbound.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Outbound pump task failed: {e}");
                Ok(())
            }
        };

        tracing::debug!("Draining session");
        cancel.cancel();
        if let Err(e) = inbound.await {
            tracing::error!("Inbound pump task failed: {e}");
        }

        conn.close().await;
        tracing::debug!("Session closed");

        outcome.map_err(SessionError::from)
    }
}

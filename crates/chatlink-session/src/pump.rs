//! The two pump loops moving data between the connection and the user.

use std::sync::Arc;

use chatlink_core::{Connection, LineSource, OutputSink, SendError, Unit};
use tokio_util::sync::CancellationToken;

/// The sentinel input line that ends the session. Exact, case-sensitive
/// match only; any other line (including an empty one) is sent as-is.
pub const EXIT_COMMAND: &str = "exit";

/// Drains the connection and renders inbound text to the user.
pub struct InboundPump<C, O> {
    conn: Arc<C>,
    sink: O,
    cancel: CancellationToken,
}

impl<C, O> InboundPump<C, O>
where
    C: Connection,
    O: OutputSink,
{
    /// Create a pump over a shared connection reference.
    ///
    /// The pump never closes the connection; that is the coordinator's job.
    #[must_use]
    pub fn new(conn: Arc<C>, sink: O, cancel: CancellationToken) -> Self {
        Self { conn, sink, cancel }
    }

    /// Run until the peer closes, the transport faults or `cancel` fires.
    ///
    /// Inbound closure is an expected terminal condition here, not a
    /// failure: nothing propagates, the session just stops receiving.
    pub async fn run(mut self) {
        loop {
            let next = tokio::select! {
                () = self.cancel.cancelled() => {
                    tracing::debug!("Inbound pump cancelled");
                    return;
                }
                next = self.conn.recv_next() => next,
            };

            match next {
                Ok(Some(Unit::Text(text))) => {
                    if let Err(e) = self.sink.render(&text).await {
                        tracing::debug!("Output sink failed: {e}");
                        return;
                    }
                }
                // Not meaningful to the session; receive and move on.
                Ok(Some(Unit::Frame(_))) => {}
                Ok(None) => {
                    tracing::debug!("Peer closed the inbound stream");
                    return;
                }
                Err(e) => {
                    tracing::debug!("Receive failed: {e}");
                    return;
                }
            }
        }
    }
}

/// Reads user input lines and transmits them.
pub struct OutboundPump<C, I> {
    conn: Arc<C>,
    input: I,
}

impl<C, I> OutboundPump<C, I>
where
    C: Connection,
    I: LineSource,
{
    /// Create a pump over a shared connection reference.
    #[must_use]
    pub fn new(conn: Arc<C>, input: I) -> Self {
        Self { conn, input }
    }

    /// Run until the user types [`EXIT_COMMAND`], input ends, or a send
    /// fails.
    ///
    /// # Errors
    /// Returns the `SendError` that ended the loop; this is the one
    /// condition under which the session ends in failure rather than by
    /// user intent.
    pub async fn run(mut self) -> Result<(), SendError> {
        loop {
            let line = match self.input.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::debug!("End of user input");
                    return Ok(());
                }
                Err(e) => {
                    // An unreadable input source has nothing more to say;
                    // treat it like end of input.
                    tracing::debug!("Input source failed: {e}");
                    return Ok(());
                }
            };

            if line == EXIT_COMMAND {
                tracing::debug!("Exit command entered");
                return Ok(());
            }

            self.conn.send_text(&line).await?;
        }
    }
}

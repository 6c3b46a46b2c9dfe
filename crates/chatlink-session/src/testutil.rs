//! In-memory fakes for pump and coordinator tests.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use chatlink_core::{
    ConnectError, Connection, Endpoint, LineSource, OutputSink, ReceiveError, SendError,
    Transport, Unit,
};
use tokio::sync::{Mutex, mpsc};

type InboundItem = Result<Option<Unit>, ReceiveError>;

/// Test double for a duplex connection, driven through a [`MockHandle`].
pub struct MockConnection {
    inbound: Mutex<mpsc::UnboundedReceiver<InboundItem>>,
    sent: Arc<StdMutex<Vec<String>>>,
    fail_sends: Arc<AtomicBool>,
    close_count: Arc<AtomicUsize>,
}

/// Controls a [`MockConnection`] and records what happened to it.
#[derive(Clone)]
pub struct MockHandle {
    inbound_tx: mpsc::UnboundedSender<InboundItem>,
    sent: Arc<StdMutex<Vec<String>>>,
    fail_sends: Arc<AtomicBool>,
    close_count: Arc<AtomicUsize>,
}

impl MockConnection {
    /// Create a connection plus the handle that drives it.
    pub fn pair() -> (Self, MockHandle) {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        let sent = Arc::new(StdMutex::new(Vec::new()));
        let fail_sends = Arc::new(AtomicBool::new(false));
        let close_count = Arc::new(AtomicUsize::new(0));

        let conn = Self {
            inbound: Mutex::new(inbound_rx),
            sent: Arc::clone(&sent),
            fail_sends: Arc::clone(&fail_sends),
            close_count: Arc::clone(&close_count),
        };
        let handle = MockHandle {
            inbound_tx,
            sent,
            fail_sends,
            close_count,
        };
        (conn, handle)
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn recv_next(&self) -> Result<Option<Unit>, ReceiveError> {
        // Pend while the handle is alive but has queued nothing, like a
        // real socket with no traffic.
        match self.inbound.lock().await.recv().await {
            Some(item) => item,
            None => Ok(None),
        }
    }

    async fn send_text(&self, payload: &str) -> Result<(), SendError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(SendError::Transport("injected send failure".into()));
        }
        self.sent.lock().unwrap().push(payload.to_string());
        Ok(())
    }

    async fn close(&self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl MockHandle {
    pub fn push_text(&self, text: &str) {
        let _ = self.inbound_tx.send(Ok(Some(Unit::Text(text.to_string()))));
    }

    pub fn push_frame(&self, data: &'static [u8]) {
        let _ = self
            .inbound_tx
            .send(Ok(Some(Unit::Frame(bytes::Bytes::from_static(data)))));
    }

    pub fn push_end_of_stream(&self) {
        let _ = self.inbound_tx.send(Ok(None));
    }

    pub fn push_receive_error(&self, reason: &str) {
        let _ = self
            .inbound_tx
            .send(Err(ReceiveError::Transport(reason.to_string())));
    }

    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

/// Transport double: hands out one prepared connection, or refuses.
pub struct MockTransport {
    conn: StdMutex<Option<MockConnection>>,
}

impl MockTransport {
    pub fn with_connection(conn: MockConnection) -> Self {
        Self {
            conn: StdMutex::new(Some(conn)),
        }
    }

    pub fn refusing() -> Self {
        Self {
            conn: StdMutex::new(None),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Conn = MockConnection;

    async fn open(&self, _endpoint: &Endpoint) -> Result<MockConnection, ConnectError> {
        self.conn
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ConnectError::Handshake("connection refused".into()))
    }
}

/// Line source fed through a channel; drop the sender to signal end of
/// input.
pub struct ChannelInput {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelInput {
    pub fn new() -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl LineSource for ChannelInput {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.rx.recv().await)
    }
}

/// Input source pre-loaded with lines, ending in end-of-input.
pub fn scripted_input(lines: &[&str]) -> ChannelInput {
    let (tx, input) = ChannelInput::new();
    for line in lines {
        let _ = tx.send((*line).to_string());
    }
    input
}

/// Sink that forwards every rendered line to a channel.
pub struct RecordingSink {
    tx: mpsc::UnboundedSender<String>,
}

impl RecordingSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl OutputSink for RecordingSink {
    async fn render(&mut self, text: &str) -> io::Result<()> {
        self.tx
            .send(text.to_string())
            .map_err(|_| io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

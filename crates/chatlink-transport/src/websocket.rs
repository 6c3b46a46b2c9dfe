//! WebSocket connection over `tokio-tungstenite`.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chatlink_core::{ConnectError, Connection, Endpoint, ReceiveError, SendError, Transport, Unit};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Transport that opens plain-text WebSocket connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct WsTransport;

#[async_trait]
impl Transport for WsTransport {
    type Conn = WsConnection;

    async fn open(&self, endpoint: &Endpoint) -> Result<WsConnection, ConnectError> {
        let url = endpoint.to_string();
        let (socket, _response) = connect_async(url.as_str()).await.map_err(|e| match e {
            WsError::Url(e) => ConnectError::InvalidEndpoint(e.to_string()),
            other => ConnectError::Handshake(other.to_string()),
        })?;
        tracing::debug!(%url, "WebSocket connected");
        Ok(WsConnection::new(socket))
    }
}

/// One open WebSocket connection.
///
/// The socket is split so that receiving and sending lock independent
/// halves; a blocked receive never delays a concurrent send.
#[derive(Debug)]
pub struct WsConnection {
    reader: Mutex<SplitStream<WsStream>>,
    writer: Mutex<SplitSink<WsStream, Message>>,
    closed: AtomicBool,
}

impl WsConnection {
    fn new(socket: WsStream) -> Self {
        let (writer, reader) = socket.split();
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Connection for WsConnection {
    async fn recv_next(&self) -> Result<Option<Unit>, ReceiveError> {
        let next = self.reader.lock().await.next().await;
        match next {
            None => Ok(None),
            Some(Ok(Message::Text(text))) => Ok(Some(Unit::Text(text.to_string()))),
            Some(Ok(Message::Close(frame))) => {
                tracing::debug!(?frame, "Peer closed the connection");
                Ok(None)
            }
            Some(Ok(other)) => Ok(Some(Unit::Frame(other.into_data()))),
            Some(Err(WsError::ConnectionClosed | WsError::AlreadyClosed)) => Ok(None),
            Some(Err(e)) => Err(ReceiveError::Transport(e.to_string())),
        }
    }

    async fn send_text(&self, payload: &str) -> Result<(), SendError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SendError::Closed);
        }
        self.writer
            .lock()
            .await
            .send(Message::text(payload))
            .await
            .map_err(|e| match e {
                WsError::ConnectionClosed | WsError::AlreadyClosed => SendError::Closed,
                other => SendError::Transport(other.to_string()),
            })
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        // Best effort: the peer may already be gone.
        if let Err(e) = self.writer.lock().await.close().await {
            tracing::debug!("Error while closing WebSocket: {e}");
        }
    }
}

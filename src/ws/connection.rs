//! Per-socket task.
//!
//! Registers the socket with the dispatcher, forwards queued expressions as
//! text frames, and reports the close once the peer goes away or the
//! transport fails.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use crate::domain::{Connection, ConnectionState, EventSender, ServerEvent};

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Sends [`ServerEvent::Connected`] before touching the socket.
/// - Writes every expression queued on the connection's channel.
/// - Ignores inbound data frames; a close frame, end of stream or a
///   transport error ends the loop.
/// - Sends [`ServerEvent::Closed`] on the way out.
pub async fn run_connection(socket: WebSocket, peer: Option<SocketAddr>, events: EventSender) {
    let (conn, mut outbound) = Connection::channel(peer);
    let id = conn.id();
    tracing::debug!(connection_id = %id, state = %ConnectionState::Connecting, "ws upgraded");

    if events.send(ServerEvent::Connected(conn)).await.is_err() {
        tracing::warn!(connection_id = %id, "dispatcher gone, dropping connection");
        return;
    }

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Expression queued by the dispatcher
            expression = outbound.recv() => {
                let Some(expression) = expression else {
                    break;
                };
                if let Err(e) = ws_tx.send(Message::text(expression.as_str())).await {
                    tracing::warn!(connection_id = %id, error = %e, "ws send failed");
                    break;
                }
            }
            // Incoming frame from the display
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!(connection_id = %id, text = %text.as_str(), "ignoring client text");
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(connection_id = %id, error = %e, "ws transport error");
                        break;
                    }
                }
            }
        }
    }

    drop(outbound);
    if events.send(ServerEvent::Closed(id)).await.is_err() {
        tracing::debug!(connection_id = %id, "dispatcher gone, close not reported");
    }
    tracing::debug!(connection_id = %id, state = %ConnectionState::Closed, "ws connection closed");
}

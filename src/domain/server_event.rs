//! Unified event stream consumed by the dispatcher.
//!
//! Socket tasks, the console reader and the HTTP status handler never touch
//! the registry directly. They send a [`ServerEvent`] and the dispatcher
//! applies it in arrival order.

use std::net::SocketAddr;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use super::{Connection, ConnectionId};

/// Sending half of the dispatcher's event channel.
pub type EventSender = mpsc::Sender<ServerEvent>;

/// Receiving half of the dispatcher's event channel.
pub type EventReceiver = mpsc::Receiver<ServerEvent>;

/// Creates the bounded event channel shared by all event sources.
#[must_use]
pub fn event_channel(capacity: usize) -> (EventSender, EventReceiver) {
    mpsc::channel(capacity.max(1))
}

/// Everything the dispatcher reacts to.
#[derive(Debug)]
pub enum ServerEvent {
    /// A socket finished its upgrade and is ready for frames.
    Connected(Connection),
    /// A socket closed or failed.
    Closed(ConnectionId),
    /// One raw operator line.
    Command(String),
    /// A request for the current [`StatusReport`].
    Status(oneshot::Sender<StatusReport>),
}

/// Snapshot of the relay state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Address the listener is bound to.
    pub listen_addr: SocketAddr,
    /// Number of tracked connections.
    pub connected_clients: usize,
    /// URL displays should connect to.
    pub ws_url: String,
}

impl StatusReport {
    /// Builds a report for the given listener and client count.
    #[must_use]
    pub fn new(listen_addr: SocketAddr, connected_clients: usize) -> Self {
        Self {
            listen_addr,
            connected_clients,
            ws_url: format!("ws://localhost:{}", listen_addr.port()),
        }
    }
}

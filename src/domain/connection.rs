//! Registry-side handle to one accepted WebSocket session.
//!
//! The socket itself is owned by the per-connection task in
//! [`crate::ws::connection`]. The registry only keeps the sending half of
//! that task's outbound queue, so a [`Connection`] is open exactly as long
//! as the task is still draining it.

use std::fmt;
use std::net::SocketAddr;

use tokio::sync::mpsc;

use super::{ConnectionId, Expression};
use crate::error::RelayError;

/// Lifecycle of a connection: `Connecting -> Open -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Upgrade accepted, not yet registered.
    Connecting,
    /// Registered and accepting frames.
    Open,
    /// Transport gone. Terminal.
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// An open bidirectional message channel to one remote peer.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    peer: Option<SocketAddr>,
    outbound: mpsc::UnboundedSender<Expression>,
}

impl Connection {
    /// Wraps an existing outbound sender.
    #[must_use]
    pub fn new(
        id: ConnectionId,
        peer: Option<SocketAddr>,
        outbound: mpsc::UnboundedSender<Expression>,
    ) -> Self {
        Self { id, peer, outbound }
    }

    /// Creates a connection with a fresh id together with the receiving end
    /// of its outbound queue.
    #[must_use]
    pub fn channel(peer: Option<SocketAddr>) -> (Self, mpsc::UnboundedReceiver<Expression>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(ConnectionId::new(), peer, tx), rx)
    }

    /// Returns the connection identity.
    #[must_use]
    pub const fn id(&self) -> ConnectionId {
        self.id
    }

    /// Returns the remote address, when known.
    #[must_use]
    pub const fn peer(&self) -> Option<SocketAddr> {
        self.peer
    }

    /// Returns `true` while the owning socket task is alive.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.outbound.is_closed()
    }

    /// Queues an expression for delivery as a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConnectionClosed`] if the socket task has
    /// already exited.
    pub fn send(&self, expression: Expression) -> Result<(), RelayError> {
        self.outbound
            .send(expression)
            .map_err(|_| RelayError::ConnectionClosed(self.id))
    }
}

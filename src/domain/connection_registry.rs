//! Set of currently tracked client connections.
//!
//! [`ConnectionRegistry`] is owned by the dispatcher task and is never
//! shared, so it needs no interior locking. Every mutation and every
//! iteration happens on that one task.

use std::collections::HashMap;

use super::{Connection, ConnectionId};

/// Identity-keyed set of [`Connection`]s.
///
/// A connection present here is assumed open, but its transport may close
/// at any moment; readers must re-check [`Connection::is_open`] before
/// sending.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, Connection>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a connection. Re-adding the same id replaces the handle.
    pub fn add(&mut self, conn: Connection) {
        self.connections.insert(conn.id(), conn);
    }

    /// Removes a connection by id, returning it if it was present.
    pub fn remove(&mut self, id: ConnectionId) -> Option<Connection> {
        self.connections.remove(&id)
    }

    /// Returns `true` if a connection with this id is tracked.
    #[must_use]
    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    /// Iterates over tracked connections in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Returns the number of tracked connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if no connection is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

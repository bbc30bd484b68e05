//! Fan-out of one expression to every open connection.

use crate::domain::{ConnectionRegistry, Expression};

/// Result of a single broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// The registry was empty; nothing was sent.
    NoClients,
    /// At least one connection was tracked.
    Sent {
        /// Expression that was broadcast.
        expression: Expression,
        /// Connections the frame was queued on.
        reached: usize,
        /// Tracked connections that were closed or refused the frame.
        skipped: usize,
    },
}

impl BroadcastOutcome {
    /// Number of connections reached.
    #[must_use]
    pub const fn reached(&self) -> usize {
        match self {
            Self::NoClients => 0,
            Self::Sent { reached, .. } => *reached,
        }
    }
}

/// Sends `expression` to every open connection in `registry`.
///
/// Closed connections are skipped but left in the registry; they are
/// removed when their own close event arrives. A failed send is logged and
/// not retried. Never suspends.
pub fn broadcast(registry: &ConnectionRegistry, expression: Expression) -> BroadcastOutcome {
    if registry.is_empty() {
        return BroadcastOutcome::NoClients;
    }

    let mut reached = 0;
    let mut skipped = 0;
    for conn in registry.iter() {
        if !conn.is_open() {
            skipped += 1;
            continue;
        }
        match conn.send(expression) {
            Ok(()) => reached += 1,
            Err(e) => {
                tracing::warn!(connection_id = %conn.id(), error = %e, "broadcast send failed");
                skipped += 1;
            }
        }
    }

    tracing::info!(%expression, reached, skipped, "broadcast complete");
    BroadcastOutcome::Sent {
        expression,
        reached,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Connection;

    #[test]
    fn empty_registry_reports_no_clients() {
        let registry = ConnectionRegistry::new();
        let outcome = broadcast(&registry, Expression::Roar);
        assert_eq!(outcome, BroadcastOutcome::NoClients);
        assert_eq!(outcome.reached(), 0);
    }

    #[test]
    fn reaches_exactly_the_open_connections() {
        let mut registry = ConnectionRegistry::new();
        let mut open = Vec::new();
        for _ in 0..3 {
            let (conn, rx) = Connection::channel(None);
            registry.add(conn);
            open.push(rx);
        }
        let (closed, closed_rx) = Connection::channel(None);
        let closed_id = closed.id();
        registry.add(closed);
        drop(closed_rx);

        let outcome = broadcast(&registry, Expression::Roar);
        assert_eq!(
            outcome,
            BroadcastOutcome::Sent {
                expression: Expression::Roar,
                reached: 3,
                skipped: 1,
            }
        );
        for rx in &mut open {
            assert_eq!(rx.try_recv().ok(), Some(Expression::Roar));
            assert!(rx.try_recv().is_err());
        }
        // skipping is not removal
        assert!(registry.contains(closed_id));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn all_closed_still_reports_sent_with_zero_reached() {
        let mut registry = ConnectionRegistry::new();
        let (conn, rx) = Connection::channel(None);
        registry.add(conn);
        drop(rx);

        let outcome = broadcast(&registry, Expression::Blink);
        assert_eq!(outcome.reached(), 0);
        assert!(matches!(outcome, BroadcastOutcome::Sent { skipped: 1, .. }));
    }
}

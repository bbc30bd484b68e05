//! Single-task event loop that owns the connection registry.
//!
//! [`Dispatcher`] applies [`ServerEvent`]s strictly in arrival order.
//! Registry mutation, broadcast fan-out and status snapshots all happen on
//! this one task, which is what lets the registry go without locks.

use std::net::SocketAddr;

use super::broadcaster::broadcast;
use crate::console::{Command, ConsoleReply};
use crate::domain::{
    Connection, ConnectionId, ConnectionRegistry, ConnectionState, EventReceiver, Expression,
    ServerEvent, StatusReport,
};

/// What the loop should do after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep going, optionally printing a reply for the operator.
    Continue(Option<ConsoleReply>),
    /// Stop the relay.
    Shutdown,
}

/// Owner of the [`ConnectionRegistry`].
#[derive(Debug)]
pub struct Dispatcher {
    registry: ConnectionRegistry,
    listen_addr: SocketAddr,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    #[must_use]
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            listen_addr,
        }
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Returns a status snapshot.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport::new(self.listen_addr, self.registry.len())
    }

    /// Applies one event.
    pub fn handle(&mut self, event: ServerEvent) -> Flow {
        match event {
            ServerEvent::Connected(conn) => {
                self.on_connected(conn);
                Flow::Continue(None)
            }
            ServerEvent::Closed(id) => {
                self.on_closed(id);
                Flow::Continue(None)
            }
            ServerEvent::Command(line) => self.on_command(&line),
            ServerEvent::Status(reply) => {
                if reply.send(self.status()).is_err() {
                    tracing::debug!("status requester went away");
                }
                Flow::Continue(None)
            }
        }
    }

    /// Runs until a quit command arrives or every event sender is dropped.
    ///
    /// Replies are printed to standard output.
    pub async fn run(mut self, mut events: EventReceiver) {
        while let Some(event) = events.recv().await {
            match self.handle(event) {
                Flow::Continue(Some(reply)) => println!("{reply}"),
                Flow::Continue(None) => {}
                Flow::Shutdown => {
                    println!("{}", ConsoleReply::ShuttingDown);
                    break;
                }
            }
        }
        tracing::info!(clients = self.registry.len(), "dispatcher stopped");
    }

    fn on_connected(&mut self, conn: Connection) {
        let id = conn.id();
        let peer = conn.peer();
        // Queued ahead of any later broadcast on the same channel.
        let greeting = conn.send(Expression::Blink);
        self.registry.add(conn);
        tracing::info!(
            connection_id = %id,
            peer = ?peer,
            state = %ConnectionState::Open,
            clients = self.registry.len(),
            "client connected"
        );
        if let Err(e) = greeting {
            tracing::warn!(connection_id = %id, error = %e, "greeting not delivered");
        }
    }

    fn on_closed(&mut self, id: ConnectionId) {
        if self.registry.remove(id).is_some() {
            tracing::info!(
                connection_id = %id,
                clients = self.registry.len(),
                "client disconnected"
            );
        }
    }

    fn on_command(&mut self, line: &str) -> Flow {
        let reply = match Command::parse(line) {
            Command::Broadcast(expression) => {
                ConsoleReply::Broadcast(broadcast(&self.registry, expression))
            }
            Command::Status => ConsoleReply::Status(self.status()),
            Command::Help => ConsoleReply::Help,
            Command::Quit => {
                tracing::info!("quit requested");
                return Flow::Shutdown;
            }
            Command::Unknown(input) => {
                tracing::debug!(%input, "unknown console command");
                ConsoleReply::Unknown(input)
            }
        };
        Flow::Continue(Some(reply))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use tokio::sync::{mpsc, oneshot};

    use super::*;
    use crate::domain::event_channel;
    use crate::service::BroadcastOutcome;

    fn addr() -> SocketAddr {
        ([127, 0, 0, 1], 10808).into()
    }

    fn connect(dispatcher: &mut Dispatcher) -> (ConnectionId, mpsc::UnboundedReceiver<Expression>) {
        let (conn, rx) = Connection::channel(None);
        let id = conn.id();
        assert_eq!(dispatcher.handle(ServerEvent::Connected(conn)), Flow::Continue(None));
        (id, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Expression>) -> Vec<Expression> {
        let mut out = Vec::new();
        while let Ok(expr) = rx.try_recv() {
            out.push(expr);
        }
        out
    }

    #[test]
    fn new_connection_gets_one_blink_first() {
        let mut dispatcher = Dispatcher::new(addr());
        let (_, mut rx) = connect(&mut dispatcher);
        dispatcher.handle(ServerEvent::Command("roar".to_string()));
        assert_eq!(drain(&mut rx), [Expression::Blink, Expression::Roar]);
    }

    #[test]
    fn broadcast_with_no_clients() {
        let mut dispatcher = Dispatcher::new(addr());
        let flow = dispatcher.handle(ServerEvent::Command("1".to_string()));
        assert_eq!(
            flow,
            Flow::Continue(Some(ConsoleReply::Broadcast(BroadcastOutcome::NoClients)))
        );
    }

    #[test]
    fn three_clients_roar_then_two_blink() {
        let mut dispatcher = Dispatcher::new(addr());
        let mut clients: Vec<_> = (0..3).map(|_| connect(&mut dispatcher)).collect();
        for (_, rx) in &mut clients {
            assert_eq!(drain(rx), [Expression::Blink]);
        }

        let flow = dispatcher.handle(ServerEvent::Command("roar".to_string()));
        let Flow::Continue(Some(ConsoleReply::Broadcast(outcome))) = flow else {
            panic!("expected broadcast reply");
        };
        assert_eq!(outcome.reached(), 3);
        for (_, rx) in &mut clients {
            assert_eq!(drain(rx), [Expression::Roar]);
        }

        let Some((gone_id, gone_rx)) = clients.pop() else {
            panic!("three clients expected");
        };
        drop(gone_rx);
        dispatcher.handle(ServerEvent::Closed(gone_id));

        let flow = dispatcher.handle(ServerEvent::Command("blink".to_string()));
        let Flow::Continue(Some(ConsoleReply::Broadcast(outcome))) = flow else {
            panic!("expected broadcast reply");
        };
        assert_eq!(outcome.reached(), 2);
        for (_, rx) in &mut clients {
            assert_eq!(drain(rx), [Expression::Blink]);
        }

        let flow = dispatcher.handle(ServerEvent::Command("status".to_string()));
        let Flow::Continue(Some(ConsoleReply::Status(report))) = flow else {
            panic!("expected status reply");
        };
        assert_eq!(report.connected_clients, 2);
    }

    #[test]
    fn unknown_command_changes_nothing() {
        let mut dispatcher = Dispatcher::new(addr());
        let (id, mut rx) = connect(&mut dispatcher);
        drain(&mut rx);

        let flow = dispatcher.handle(ServerEvent::Command("foo".to_string()));
        assert_eq!(
            flow,
            Flow::Continue(Some(ConsoleReply::Unknown("foo".to_string())))
        );
        assert_eq!(dispatcher.registry().len(), 1);
        assert!(dispatcher.registry().contains(id));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn closing_unknown_id_is_noop() {
        let mut dispatcher = Dispatcher::new(addr());
        let _client = connect(&mut dispatcher);
        dispatcher.handle(ServerEvent::Closed(ConnectionId::new()));
        assert_eq!(dispatcher.registry().len(), 1);
    }

    #[test]
    fn help_and_quit() {
        let mut dispatcher = Dispatcher::new(addr());
        assert_eq!(
            dispatcher.handle(ServerEvent::Command("help".to_string())),
            Flow::Continue(Some(ConsoleReply::Help))
        );
        assert_eq!(
            dispatcher.handle(ServerEvent::Command("EXIT".to_string())),
            Flow::Shutdown
        );
    }

    #[tokio::test]
    async fn status_event_answers_on_oneshot() {
        let mut dispatcher = Dispatcher::new(addr());
        let _client = connect(&mut dispatcher);

        let (tx, rx) = oneshot::channel();
        dispatcher.handle(ServerEvent::Status(tx));
        let report = tokio_test::assert_ok!(rx.await);
        assert_eq!(report.connected_clients, 1);
        assert_eq!(report.listen_addr, addr());
    }

    #[tokio::test]
    async fn run_stops_on_quit() {
        let (tx, rx) = event_channel(8);
        let task = tokio::spawn(Dispatcher::new(addr()).run(rx));

        let _ = tx.send(ServerEvent::Command("quit".to_string())).await;
        tokio_test::assert_ok!(task.await);
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn run_stops_when_senders_drop() {
        let (tx, rx) = event_channel(8);
        let task = tokio::spawn(Dispatcher::new(addr()).run(rx));
        drop(tx);
        tokio_test::assert_ok!(task.await);
    }
}

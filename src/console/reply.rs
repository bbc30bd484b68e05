//! Text rendered back to the operator.

use std::fmt;
use std::net::SocketAddr;

use crate::domain::StatusReport;
use crate::service::BroadcastOutcome;

const HELP: &str = "\
=== expression relay commands ===
1 or blink    - send the blink expression
2 or roar     - send the roar expression
status        - show relay status
help          - show this help
quit or exit  - stop the relay
=================================";

/// Operator-facing output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleReply {
    /// Startup banner for the bound listener.
    Banner(SocketAddr),
    /// Command table.
    Help,
    /// Status block.
    Status(StatusReport),
    /// Result of a broadcast.
    Broadcast(BroadcastOutcome),
    /// Unrecognized input.
    Unknown(String),
    /// Printed right before the process exits.
    ShuttingDown,
}

impl fmt::Display for ConsoleReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Banner(addr) => {
                writeln!(f, "expression relay listening on port {}", addr.port())?;
                write!(f, "WebSocket address: ws://localhost:{}", addr.port())
            }
            Self::Help => f.write_str(HELP),
            Self::Status(report) => {
                writeln!(f, "=== relay status ===")?;
                writeln!(f, "port: {}", report.listen_addr.port())?;
                writeln!(f, "connected clients: {}", report.connected_clients)?;
                writeln!(f, "WebSocket address: {}", report.ws_url)?;
                write!(f, "====================")
            }
            Self::Broadcast(BroadcastOutcome::NoClients) => f.write_str("no clients connected"),
            Self::Broadcast(BroadcastOutcome::Sent {
                expression,
                reached,
                skipped,
            }) => {
                write!(f, "sent {expression} to {reached} client(s)")?;
                if *skipped > 0 {
                    write!(f, ", {skipped} skipped")?;
                }
                Ok(())
            }
            Self::Unknown(input) => {
                write!(f, "unknown command {input:?}; type \"help\" for the command list")
            }
            Self::ShuttingDown => f.write_str("shutting down relay..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Expression;

    #[test]
    fn help_lists_every_command() {
        let text = ConsoleReply::Help.to_string();
        for word in ["blink", "roar", "status", "help", "quit", "exit"] {
            assert!(text.contains(word), "help is missing {word}");
        }
    }

    #[test]
    fn status_shows_count_and_url() {
        let report = StatusReport::new(([127, 0, 0, 1], 10808).into(), 2);
        let text = ConsoleReply::Status(report).to_string();
        assert!(text.contains("connected clients: 2"));
        assert!(text.contains("ws://localhost:10808"));
    }

    #[test]
    fn broadcast_lines() {
        let none = ConsoleReply::Broadcast(BroadcastOutcome::NoClients);
        assert_eq!(none.to_string(), "no clients connected");

        let sent = ConsoleReply::Broadcast(BroadcastOutcome::Sent {
            expression: Expression::Roar,
            reached: 3,
            skipped: 0,
        });
        assert_eq!(sent.to_string(), "sent roar to 3 client(s)");

        let partial = ConsoleReply::Broadcast(BroadcastOutcome::Sent {
            expression: Expression::Blink,
            reached: 1,
            skipped: 1,
        });
        assert_eq!(partial.to_string(), "sent blink to 1 client(s), 1 skipped");
    }
}

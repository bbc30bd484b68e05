//! Domain layer: connection identity, the connection registry, wire
//! expressions and the dispatcher event model.

pub mod connection;
pub mod connection_id;
pub mod connection_registry;
pub mod expression;
pub mod server_event;

pub use connection::{Connection, ConnectionState};
pub use connection_id::ConnectionId;
pub use connection_registry::ConnectionRegistry;
pub use expression::Expression;
pub use server_event::{EventReceiver, EventSender, ServerEvent, StatusReport, event_channel};

//! Service layer: broadcast fan-out and the dispatcher event loop.
//!
//! [`Dispatcher`] owns the [`crate::domain::ConnectionRegistry`] and calls
//! [`broadcaster::broadcast`] for operator-triggered expressions.

pub mod broadcaster;
pub mod dispatcher;

pub use broadcaster::{BroadcastOutcome, broadcast};
pub use dispatcher::{Dispatcher, Flow};

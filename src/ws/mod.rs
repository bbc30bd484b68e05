//! WebSocket layer: upgrade handling and the per-socket task.
//!
//! Displays connect at `/` (or `/ws`), receive a `"blink"` greeting, and
//! then whatever the operator broadcasts.

pub mod connection;
pub mod handler;

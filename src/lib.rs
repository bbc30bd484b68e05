//! # emote-relay
//!
//! WebSocket test relay for expression displays.
//!
//! Displays connect over WebSocket and receive a `"blink"` greeting. An
//! operator then types commands on standard input and the relay broadcasts
//! `"blink"` or `"roar"` to every open connection.
//!
//! ## Architecture
//!
//! ```text
//! Displays (WebSocket)     Operator (stdin)     HTTP (/health, /status)
//!     │                        │                     │
//!     ├── ws/ socket tasks     ├── console/ reader   ├── api/
//!     │                        │                     │
//!     └────────── ServerEvent channel ───────────────┘
//!                              │
//!                     Dispatcher (service/)
//!                              │
//!           ConnectionRegistry (domain/) ── broadcast
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod relay;
pub mod service;
pub mod ws;

//! Operator console: line reader, command grammar and reply rendering.

pub mod command;
pub mod reader;
pub mod reply;

pub use command::Command;
pub use reader::{forward_lines, spawn_console};
pub use reply::ConsoleReply;

//! Operator line source.
//!
//! Interactive stdin is read on a dedicated OS thread with blocking I/O and
//! forwarded into the dispatcher channel, so a pending read never holds up
//! runtime shutdown.

use std::io::BufRead;
use std::thread::JoinHandle;

use crate::domain::{EventSender, ServerEvent};
use crate::error::RelayError;

/// Starts the `console` thread reading standard input.
///
/// # Errors
///
/// Returns [`RelayError::Console`] if the thread cannot be spawned.
pub fn spawn_console(events: EventSender) -> Result<JoinHandle<()>, RelayError> {
    std::thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            forward_lines(stdin.lock(), &events);
        })
        .map_err(RelayError::Console)
}

/// Forwards every line of `reader` as a [`ServerEvent::Command`].
///
/// Invalid UTF-8 is decoded lossily so the line still reaches the command
/// parser. Stops at end of input, on an I/O error, or once the dispatcher
/// has dropped its receiver. Returns the number of lines forwarded. Must not
/// be called from inside an async context.
pub fn forward_lines<R: BufRead>(mut reader: R, events: &EventSender) -> usize {
    let mut forwarded = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read console input");
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        if events.blocking_send(ServerEvent::Command(line)).is_err() {
            tracing::debug!("dispatcher gone, console reader stopping");
            break;
        }
        forwarded += 1;
    }
    tracing::info!(forwarded, "console input closed");
    forwarded
}

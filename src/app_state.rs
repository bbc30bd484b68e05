//! Shared application state injected into all Axum handlers.

use tokio::sync::oneshot;

use crate::domain::{EventSender, ServerEvent, StatusReport};
use crate::error::RelayError;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Handlers never see the registry. They talk to the dispatcher through
/// its event channel.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dispatcher event channel.
    pub events: EventSender,
}

impl AppState {
    /// Creates state around the dispatcher's event sender.
    #[must_use]
    pub fn new(events: EventSender) -> Self {
        Self { events }
    }

    /// Asks the dispatcher for a status snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::DispatcherUnavailable`] if the dispatcher has
    /// stopped.
    pub async fn status(&self) -> Result<StatusReport, RelayError> {
        let (tx, rx) = oneshot::channel();
        self.events
            .send(ServerEvent::Status(tx))
            .await
            .map_err(|_| RelayError::DispatcherUnavailable)?;
        rx.await.map_err(|_| RelayError::DispatcherUnavailable)
    }
}

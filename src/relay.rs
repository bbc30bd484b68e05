//! Router assembly and process wiring.
//!
//! [`start`] binds the listener, spawns the dispatcher and the HTTP server,
//! and hands back a [`RelayHandle`] whose event sender is the entry point
//! for operator commands.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::RelayConfig;
use crate::domain::{EventSender, event_channel};
use crate::error::RelayError;
use crate::service::Dispatcher;
use crate::ws::handler::ws_handler;

/// Builds the full router: WebSocket upgrade plus system endpoints.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/", get(ws_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `app` on `listener` until the server fails.
///
/// # Errors
///
/// Returns [`RelayError::Serve`] on a server I/O error.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), RelayError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(RelayError::Serve)
}

/// Running relay.
#[derive(Debug)]
pub struct RelayHandle {
    local_addr: SocketAddr,
    events: EventSender,
    dispatcher: JoinHandle<()>,
    server: JoinHandle<Result<(), RelayError>>,
}

impl RelayHandle {
    /// Address the listener is actually bound to.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Sender for injecting events, e.g. operator lines.
    #[must_use]
    pub fn events(&self) -> EventSender {
        self.events.clone()
    }

    /// Waits until the dispatcher stops (quit command) or the server fails.
    ///
    /// # Errors
    ///
    /// Returns the server's error if it stopped first.
    pub async fn wait(self) -> Result<(), RelayError> {
        let Self {
            dispatcher,
            mut server,
            ..
        } = self;
        tokio::select! {
            _ = dispatcher => {
                server.abort();
                Ok(())
            }
            res = &mut server => match res {
                Ok(result) => result,
                Err(e) => Err(RelayError::Serve(std::io::Error::other(e))),
            },
        }
    }

    /// Stops both tasks without waiting.
    pub fn abort(&self) {
        self.server.abort();
        self.dispatcher.abort();
    }
}

/// Binds the listener and spawns the dispatcher and server tasks.
///
/// # Errors
///
/// Returns [`RelayError::Bind`] if the listener cannot be bound.
pub async fn start(config: &RelayConfig) -> Result<RelayHandle, RelayError> {
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(RelayError::Bind)?;
    let local_addr = listener.local_addr().map_err(RelayError::Bind)?;

    let (events, events_rx) = event_channel(config.event_channel_capacity);
    let dispatcher = tokio::spawn(Dispatcher::new(local_addr).run(events_rx));
    let app = build_app(AppState::new(events.clone()));
    let server = tokio::spawn(serve(listener, app));

    tracing::info!(addr = %local_addr, "relay listening");
    Ok(RelayHandle {
        local_addr,
        events,
        dispatcher,
        server,
    })
}

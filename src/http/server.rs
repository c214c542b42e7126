//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout)
//! - Bind server to listener and stop on the shutdown signal

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::StudioConfig;
use crate::http::handlers;
use crate::studio::Studio;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Studio>,
}

/// HTTP server exposing the studio API.
pub struct StudioServer {
    router: Router,
}

impl StudioServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &StudioConfig, studio: Arc<Studio>) -> Self {
        let state = AppState { studio };
        let router = build_router(state, Duration::from_secs(config.timeouts.request_secs));
        Self { router }
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Studio API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Studio API stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/reconnect", post(handlers::reconnect))
        .route(
            "/api/canvas",
            get(handlers::get_canvas).delete(handlers::clear_canvas),
        )
        .route("/api/canvas/pointer", post(handlers::pointer))
        .route("/api/canvas/color", put(handlers::set_color))
        .route("/api/canvas.png", get(handlers::export_png))
        .route("/api/mint", post(handlers::mint))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

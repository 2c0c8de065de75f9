//! # HTTP Server
//!
//! Combines the glossary routes with the health probe and the CORS and
//! tracing layers, and runs them until a shutdown signal arrives.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use crate::observability::{log_event, Event};
use crate::rest_api::{glossary_routes, GlossaryState};

/// HTTP server for the glossary API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given glossary state
    pub fn new(config: HttpServerConfig, state: GlossaryState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    /// Health probe plus the glossary routes, traced and CORS-wrapped
    fn build_router(config: &HttpServerConfig, state: Arc<GlossaryState>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/health/", get(health_handler))
            .merge(glossary_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(event = Event::Serving.as_str(), address = %addr, "glossary API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log_event(Event::ShutdownStart);
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the chain route
//! - Wire up middleware (trace context, optional timeout)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - State is built once in `new` and cloned into handlers
//! - Graceful shutdown via the lifecycle broadcast channel, so in-flight
//!   requests finish before the telemetry guard flushes

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;

use crate::config::GatewayConfig;
use crate::downstream::{DownstreamClient, DownstreamError};
use crate::http::handlers::chain_handler;
use crate::telemetry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared client for the next service in the chain.
    pub downstream: Arc<DownstreamClient>,

    /// Service label reported in the response body.
    pub label: Arc<str>,
}

/// HTTP server for the chain gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, DownstreamError> {
        let downstream = Arc::new(DownstreamClient::new(&config.downstream)?);

        let state = AppState {
            downstream,
            label: config.response.label.clone().into(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/node-chain", get(chain_handler))
            .with_state(state)
            .layer(middleware::from_fn(telemetry::middleware::trace_context));

        if let Some(secs) = config.listener.request_timeout_secs {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(secs)));
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

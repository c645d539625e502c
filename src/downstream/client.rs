//! Outbound HTTP client for the next service in the chain.

use std::time::Duration;

use axum::http::HeaderMap;
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::config::DownstreamConfig;
use crate::telemetry::propagation;

/// Error type for downstream calls.
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    #[error("failed to build downstream client: {0}")]
    Build(reqwest::Error),

    #[error("downstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the downstream chain endpoint.
///
/// Wraps a shared `reqwest::Client` with the fixed target URL and the span
/// plumbing every outbound call needs.
pub struct DownstreamClient {
    http: reqwest::Client,
    url: String,
    operation: String,
}

impl DownstreamClient {
    /// Build the client from configuration.
    pub fn new(config: &DownstreamConfig) -> Result<Self, DownstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(DownstreamError::Build)?;

        let url = config.url();
        let operation = format!("HTTP GET {url}");

        Ok(Self {
            http,
            url,
            operation,
        })
    }

    /// Name of the outbound operation, e.g. `HTTP GET http://127.0.0.1:43000/node-chain`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Target URL of the outbound call.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fire the chain request.
    ///
    /// Opens a client span nested under the caller's span and injects its
    /// context into the outbound headers, so the downstream service links
    /// its own spans as children. The response is discarded.
    pub async fn call(&self) -> Result<(), DownstreamError> {
        let span = tracing::info_span!(
            "downstream_request",
            otel.name = "HTTP GET",
            otel.kind = "client",
            http.url = %self.url,
        );

        async {
            let mut headers = HeaderMap::new();
            let cx = tracing::Span::current().context();
            propagation::inject_context(&cx, &mut headers);

            self.http.get(&self.url).headers(headers).send().await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}

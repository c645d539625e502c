//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the chain gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, optional request timeout).
    pub listener: ListenerConfig,

    /// Downstream service to call on each request.
    pub downstream: DownstreamConfig,

    /// Telemetry export settings.
    pub telemetry: TelemetryConfig,

    /// Response body settings.
    pub response: ResponseConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:42000").
    pub bind_address: String,

    /// Optional inbound request timeout in seconds.
    ///
    /// Off by default: the handler is allowed to block on the downstream
    /// call for as long as the underlying client does.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:42000".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Downstream service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Base URL of the next service in the chain (e.g., "http://127.0.0.1:43000").
    pub base_url: String,

    /// Path to request on the downstream service.
    pub path: String,

    /// Optional timeout for the outbound call in seconds (off by default).
    pub timeout_secs: Option<u64>,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:43000".to_string(),
            path: "/node-chain".to_string(),
            timeout_secs: None,
        }
    }
}

impl DownstreamConfig {
    /// Full downstream URL (base + path).
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// Telemetry export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint (unencrypted gRPC).
    pub otlp_endpoint: String,

    /// Whether to also print every finished span to stdout.
    pub console_export: bool,

    /// Service name attached to all exported spans.
    pub service_name: String,

    /// Service namespace attached to all exported spans.
    pub service_namespace: String,

    /// Batch export timeout in seconds.
    pub export_timeout_secs: u64,

    /// Log filter (overridden by RUST_LOG).
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: "http://127.0.0.1:4317".to_string(),
            console_export: true,
            service_name: "chain-gateway".to_string(),
            service_namespace: "otel-chain".to_string(),
            export_timeout_secs: 30,
            log_filter: "chain_gateway=info,tower_http=info".to_string(),
        }
    }
}

/// Response body settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Service label reported in the response body as `{"otel": "<label>"}`.
    ///
    /// Each hop of the chain demo reports the label of the service it stands
    /// in for; this gateway defaults to the python hop.
    pub label: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            label: "python".to_string(),
        }
    }
}

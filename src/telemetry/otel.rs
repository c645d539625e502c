//! OpenTelemetry initialization.
//!
//! Builds the tracer provider with two export paths: a stdout exporter
//! behind a simple processor, and an OTLP gRPC exporter behind a batch
//! processor. The provider is wired into the `tracing` subscriber so spans
//! created with `tracing::info_span!` are exported, and the W3C propagator
//! is installed globally for header extraction/injection.

use std::time::Duration;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    propagation::TraceContextPropagator,
    trace::{Sampler, SdkTracerProvider},
    Resource,
};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;

/// Error type for telemetry initialization.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    Init(String),

    #[error("Failed to create OTLP exporter: {0}")]
    Exporter(String),
}

/// Guard that flushes and shuts down the tracer provider when dropped.
///
/// Keep this alive for the lifetime of the process; dropping it drains the
/// batch processor so spans emitted shortly before exit still reach the
/// collector.
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl std::fmt::Debug for TelemetryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryGuard")
            .field("active", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                tracing::error!("Failed to shutdown tracer provider: {e:?}");
            }
        }
    }
}

/// Initialize tracing, logging, and span export.
///
/// Installs the W3C trace-context propagator globally, builds the tracer
/// provider, and initializes the `tracing` subscriber with an env-filter,
/// a fmt layer, and the OpenTelemetry bridge layer.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let provider = build_provider(config)?;
    let tracer = provider.tracer(config.service_name.clone());
    global::set_tracer_provider(provider.clone());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    Ok(TelemetryGuard {
        provider: Some(provider),
    })
}

/// Build the tracer provider with both export paths configured.
///
/// Resource attributes identify this process on every exported span. The
/// builder's default detectors also honor `OTEL_RESOURCE_ATTRIBUTES`, so
/// deploy-time attributes can be added without a config change.
fn build_provider(config: &TelemetryConfig) -> Result<SdkTracerProvider, TelemetryError> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&config.otlp_endpoint)
        .with_timeout(Duration::from_secs(config.export_timeout_secs))
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes([
            KeyValue::new("service.namespace", config.service_namespace.clone()),
            KeyValue::new("telemetry.sdk.language", "rust"),
        ])
        .build();

    let mut builder = SdkTracerProvider::builder()
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(resource)
        .with_batch_exporter(otlp_exporter);

    if config.console_export {
        builder = builder.with_simple_exporter(opentelemetry_stdout::SpanExporter::default());
    }

    Ok(builder.build())
}

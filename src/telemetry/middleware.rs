//! Request tracing middleware.
//!
//! # Responsibilities
//! - Extract W3C trace context from incoming request headers
//! - Wrap each handler invocation in a server span
//! - Continue the caller's trace, or start a new root when none is carried
//!
//! # Design Decisions
//! - Explicit middleware instead of framework auto-instrumentation, so the
//!   context hand-off at the process boundary is visible in one place
//! - The span is a `tracing` span; the OpenTelemetry bridge layer assigns
//!   ids and exports it

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::telemetry::propagation;

/// Wrap one handler invocation in a server span parented on the inbound
/// trace context.
pub async fn trace_context(request: Request, next: Next) -> Response {
    let parent_cx = propagation::extract_context(request.headers());

    let span = tracing::info_span!(
        "request",
        otel.name = %format!("{} {}", request.method(), request.uri().path()),
        otel.kind = "server",
        http.method = %request.method(),
        http.path = %request.uri().path(),
    );
    span.set_parent(parent_cx);

    next.run(request).instrument(span).await
}

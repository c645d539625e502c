//! W3C trace-context propagation over HTTP headers.
//!
//! Thin wrappers around the globally installed text-map propagator. Both
//! directions operate on `http::HeaderMap`, which axum and reqwest share.

use axum::http::HeaderMap;
use opentelemetry::{global, Context};
use opentelemetry_http::{HeaderExtractor, HeaderInjector};

/// Extract the trace context carried by inbound request headers.
///
/// Returns an empty context when no valid `traceparent` is present; spans
/// parented on an empty context start a new root trace.
pub fn extract_context(headers: &HeaderMap) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

/// Inject the given context into outbound request headers.
pub fn inject_context(cx: &Context, headers: &mut HeaderMap) {
    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(cx, &mut HeaderInjector(headers))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
    use opentelemetry_sdk::propagation::TraceContextPropagator;

    fn install_propagator() {
        global::set_text_map_propagator(TraceContextPropagator::new());
    }

    fn remote_context(trace_id: &str, span_id: &str) -> Context {
        let span_context = SpanContext::new(
            TraceId::from_hex(trace_id).unwrap(),
            SpanId::from_hex(span_id).unwrap(),
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        Context::new().with_remote_span_context(span_context)
    }

    #[test]
    fn inject_writes_w3c_traceparent() {
        install_propagator();

        let cx = remote_context("0af7651916cd43dd8448eb211c80319c", "b7ad6b7169203331");
        let mut headers = HeaderMap::new();
        inject_context(&cx, &mut headers);

        let traceparent = headers.get("traceparent").unwrap().to_str().unwrap();
        assert_eq!(
            traceparent,
            "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"
        );
    }

    #[test]
    fn extract_roundtrips_injected_context() {
        install_propagator();

        let cx = remote_context("4bf92f3577b34da6a3ce929d0e0e4736", "00f067aa0ba902b7");
        let mut headers = HeaderMap::new();
        inject_context(&cx, &mut headers);

        let extracted = extract_context(&headers);
        assert_eq!(
            extracted.span().span_context().trace_id(),
            cx.span().span_context().trace_id()
        );
        assert_eq!(
            extracted.span().span_context().span_id(),
            cx.span().span_context().span_id()
        );
    }

    #[test]
    fn extract_without_traceparent_yields_invalid_context() {
        install_propagator();

        let extracted = extract_context(&HeaderMap::new());
        assert!(!extracted.span().span_context().is_valid());
    }

    #[test]
    fn inject_skips_invalid_context() {
        install_propagator();

        let mut headers = HeaderMap::new();
        inject_context(&Context::new(), &mut headers);
        assert!(headers.get("traceparent").is_none());
    }
}

//! Telemetry subsystem.
//!
//! # Data Flow
//! ```text
//! inbound headers
//!     → middleware.rs (extract W3C context, open server span)
//!     → handler spans (tracing crate, bridged by tracing-opentelemetry)
//!     → propagation.rs (inject context into outbound headers)
//!
//! finished spans
//!     → stdout exporter (simple processor, one span at a time)
//!     → OTLP collector (batch processor, background flushing)
//! ```
//!
//! # Design Decisions
//! - Spans are created through the `tracing` macros; the OpenTelemetry
//!   bridge layer exports them, so logging and tracing share one API
//! - Provider state is initialized once at startup and shut down through a
//!   guard value, not a module-level singleton
//! - Context crosses the process boundary only via the W3C propagator

pub mod middleware;
pub mod otel;
pub mod propagation;

pub use otel::{init_telemetry, TelemetryError, TelemetryGuard};

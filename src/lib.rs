//! Traced chain gateway.
//!
//! A single-endpoint demonstration service for distributed-tracing
//! propagation: every request to `GET /node-chain` opens a span, logs one
//! line, calls the next service in the chain with W3C trace context injected
//! into the outbound headers, and returns a fixed JSON body.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────┐
//!                     │                 CHAIN GATEWAY                    │
//!                     │                                                  │
//!   Client Request    │  ┌───────────┐   ┌──────────┐   ┌─────────────┐ │
//!   ──────────────────┼─▶│ telemetry │──▶│   http   │──▶│ downstream  │─┼──▶ Next service
//!   (traceparent?)    │  │middleware │   │ handler  │   │   client    │ │   (traceparent)
//!                     │  └─────┬─────┘   └────┬─────┘   └──────┬──────┘ │
//!                     │        │              │                │        │
//!                     │        ▼              ▼                ▼        │
//!                     │   server span ─▶ operation span ─▶ client span  │
//!                     │                                                  │
//!                     │  ┌───────────────────────────────────────────┐  │
//!                     │  │           Cross-Cutting Concerns          │  │
//!                     │  │  ┌────────┐ ┌───────────┐ ┌────────────┐  │  │
//!                     │  │  │ config │ │ telemetry │ │ lifecycle  │  │  │
//!                     │  │  │        │ │  export   │ │            │  │  │
//!                     │  │  └────────┘ └───────────┘ └────────────┘  │  │
//!                     │  └───────────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────────────┘
//!                                          │
//!                                          ▼
//!                          stdout exporter (simple, per span)
//!                          OTLP collector (gRPC, batched)
//! ```

// Core subsystems
pub mod config;
pub mod downstream;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod telemetry;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

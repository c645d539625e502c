//! Downstream chain call subsystem.
//!
//! # Responsibilities
//! - Hold the shared outbound HTTP client
//! - Open a client span around each outbound call
//! - Inject the active trace context into outbound headers
//!
//! # Design Decisions
//! - One client built at startup, shared via server state
//! - The downstream response is discarded; only transport failures surface
//! - No retries, no fallback: a network error fails the whole request

pub mod client;

pub use client::{DownstreamClient, DownstreamError};

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware wiring)
//!     → telemetry middleware (context extraction, server span)
//!     → handlers.rs (chain endpoint: span, log, downstream call)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod server;

pub use handlers::{ChainResponse, GatewayError};
pub use server::{AppState, HttpServer};

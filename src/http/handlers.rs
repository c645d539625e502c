//! Request handlers for the gateway.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::Instrument;

use crate::downstream::DownstreamError;
use crate::http::server::AppState;

/// Fixed response body of the chain endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChainResponse {
    /// Service label of this hop, e.g. `{"otel":"python"}`.
    pub otel: String,
}

/// Errors a handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Downstream(#[from] DownstreamError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Downstream(e) => {
                tracing::error!(error = %e, "Downstream request failed");
                (StatusCode::BAD_GATEWAY, "Downstream request failed").into_response()
            }
        }
    }
}

/// Handler for `GET /node-chain`, the one endpoint of the gateway.
///
/// Opens an operation span named for the outbound call, logs one line
/// inside it, fires the downstream request (which nests a client span and
/// injects context into its headers), and returns the fixed body. A
/// downstream network error propagates as 502.
pub async fn chain_handler(
    State(state): State<AppState>,
) -> Result<Json<ChainResponse>, GatewayError> {
    let span = tracing::info_span!(
        "chain",
        otel.name = %state.downstream.operation(),
    );

    async {
        tracing::info!("made downstream request!");
        state.downstream.call().await
    }
    .instrument(span)
    .await?;

    Ok(Json(ChainResponse {
        otel: state.label.to_string(),
    }))
}

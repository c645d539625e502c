//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Once;

use chain_gateway::{GatewayConfig, HttpServer, Shutdown};
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// Install a test tracer provider and the W3C propagator, once per process.
///
/// No exporters are attached; the provider only has to hand out valid span
/// contexts so header injection can be observed at the mock downstream.
pub fn init_test_telemetry() {
    INIT.call_once(|| {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let provider = SdkTracerProvider::builder()
            .with_sampler(Sampler::AlwaysOn)
            .build();
        let tracer = provider.tracer("chain-gateway-tests");
        global::set_tracer_provider(provider);

        let _ = tracing_subscriber::registry()
            .with(OpenTelemetryLayer::new(tracer))
            .try_init();
    });
}

/// One request observed by the mock downstream service.
#[derive(Debug)]
pub struct CapturedRequest {
    pub path: String,
    pub traceparent: Option<String>,
}

/// Start a mock downstream that records each request head and answers 200.
///
/// Binds an ephemeral port; the returned receiver yields one
/// [`CapturedRequest`] per inbound request.
pub async fn start_capturing_downstream() -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>)
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];
                        loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    buf.extend_from_slice(&chunk[..n]);
                                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }

                        let head = String::from_utf8_lossy(&buf);
                        let path = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or_default()
                            .to_string();
                        let traceparent = head.lines().find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("traceparent")
                                .then(|| value.trim().to_string())
                        });
                        let _ = tx.send(CapturedRequest { path, traceparent });

                        let body = r#"{"otel":"downstream"}"#;
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

/// Spawn the gateway on an ephemeral port.
///
/// Returns the bound address and the shutdown coordinator; trigger it at the
/// end of the test to stop the server.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Gateway config pointed at the given downstream address.
pub fn gateway_config(downstream: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.downstream.base_url = format!("http://{downstream}");
    config
}

/// Non-pooling client so every request opens a fresh connection.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

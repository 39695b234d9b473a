//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tokio::net::TcpListener;

use locale_gateway::config::GatewayConfig;
use locale_gateway::http::{GatewayServer, LocaleNegotiator};

/// Start a gateway on an ephemeral port and return its address.
pub async fn spawn_gateway(
    config: GatewayConfig,
    negotiator: Option<Arc<dyn LocaleNegotiator>>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = GatewayServer::new(config, negotiator).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A stub negotiator that counts invocations and answers with a marker
/// header and a body naming the path it was handed.
pub fn recording_negotiator() -> (Arc<dyn LocaleNegotiator>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let negotiator: Arc<dyn LocaleNegotiator> = Arc::new(move |req: Request<Body>| {
        let seen = seen.clone();
        async move {
            seen.fetch_add(1, Ordering::SeqCst);
            Response::builder()
                .status(StatusCode::OK)
                .header("x-negotiated", "true")
                .body(Body::from(format!("negotiated {}", req.uri().path())))
                .unwrap()
        }
    });

    (negotiator, calls)
}

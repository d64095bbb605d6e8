//! Introspection Service Binary
//!
//! Serves the gateway introspection queries as a standalone REST API:
//! - Structured JSON logging
//! - Request tracing with correlation IDs
//! - Graceful shutdown handling
//! - Health check endpoints
//!
//! ## Configuration
//!
//! Environment variables:
//! - `REGISTRY_FILE`: JSON registry seed (`{"endpoints": [...], "services": [...]}`)
//! - `CONFIG_FILE`: JSON configuration tree served by the config queries
//! - `PORT`: Service port (default: 8001)
//! - `HOST`: Service host (default: 0.0.0.0)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: json)
//!
//! ## Usage
//!
//! ```bash
//! REGISTRY_FILE=snapshot.json cargo run --bin inspect_service --features service
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn, Instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use gateway_inspect::service::middleware::metrics_middleware;
use gateway_inspect::service::{create_router, ServiceState};
use gateway_inspect::{
    ConfigSnapshot, InMemoryRegistry, MetadataRegistry, QueryEngine, RegistrySeed,
};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inspect_service=info,gateway_inspect=info,tower_http=info".into());

    if log_format == "pretty" {
        // Pretty format for local development
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_span_events(FmtSpan::CLOSE))
            .init();
    } else {
        // JSON format for production
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .flatten_event(true),
            )
            .init();
    }
}

/// Request logging middleware that adds a correlation ID and timing
async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = request.method().clone();
    let uri = request.uri().path().to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri,
        status = tracing::field::Empty,
        latency_ms = tracing::field::Empty,
    );

    let response = next.run(request).instrument(span.clone()).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();

    span.record("status", status);
    span.record("latency_ms", latency.as_millis() as u64);

    info!(
        target: "inspect_service::access",
        request_id = %request_id,
        method = %method,
        path = %uri,
        status = status,
        latency_ms = latency.as_millis() as u64,
        "request completed"
    );

    response
}

/// Load the registry seed named by `REGISTRY_FILE`, or start empty.
fn load_registry() -> Result<InMemoryRegistry, Box<dyn std::error::Error>> {
    match std::env::var("REGISTRY_FILE") {
        Ok(path) if !path.is_empty() => {
            let bytes = std::fs::read(&path)?;
            let seed: RegistrySeed = serde_json::from_slice(&bytes)?;
            let registry = InMemoryRegistry::from_seed(seed);
            info!(
                path = %path,
                endpoint_groups = registry.group_count(),
                services = registry.service_count(),
                "registry seed loaded"
            );
            Ok(registry)
        }
        _ => {
            warn!("REGISTRY_FILE not set, starting with an empty registry");
            Ok(InMemoryRegistry::new())
        }
    }
}

/// Load the configuration tree named by `CONFIG_FILE`, or start empty.
fn load_config() -> Result<ConfigSnapshot, Box<dyn std::error::Error>> {
    match std::env::var("CONFIG_FILE") {
        Ok(path) if !path.is_empty() => {
            let bytes = std::fs::read(&path)?;
            let tree = serde_json::from_slice(&bytes)?;
            info!(path = %path, "configuration tree loaded");
            Ok(ConfigSnapshot::new(tree))
        }
        _ => Ok(ConfigSnapshot::empty()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let version = env!("CARGO_PKG_VERSION");
    info!(version = version, "Starting Introspection Service");

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8001);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let registry = Arc::new(load_registry()?);
    let config = load_config()?;

    let engine = QueryEngine::new(Arc::clone(&registry), config);
    let state = ServiceState::new(engine);
    info!(
        endpoint_groups = registry.group_count(),
        services = registry.service_count(),
        snapshot_fingerprint = %registry.fingerprint(),
        "query engine initialized"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!(address = %addr, version = version, "Introspection Service listening");

    let listener = TcpListener::bind(addr).await?;

    // Graceful shutdown handling
    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
            _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
        }
    };

    info!("Ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Introspection Service shutdown complete");

    Ok(())
}

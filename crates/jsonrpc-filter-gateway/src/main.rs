//! jsonrpc-filter gateway binary.
//!
//! - Loads `jsonrpc-filter.yaml` (or the path given as first argument)
//! - Filters JSON-RPC bodies by method allowlist and batch size
//! - Forwards allowed traffic to the configured upstream

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use jsonrpc_filter_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "jsonrpc-filter.yaml".to_string());

    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("filter init failed");
    tracing::info!(%listen, upstream = %state.cfg().gateway.upstream, "jsonrpc-filter-gateway starting");
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}

//! Axum router wiring.
//!
//! `/healthz` and `/metrics` are served directly. Every other path runs
//! through the JSON-RPC interceptor and then the upstream forwarder.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport, upstream};

pub fn build_router(state: AppState) -> Router {
    let filtered = transport::interceptor::apply(
        Router::new()
            .route("/", any(upstream::forward))
            .route("/*path", any(upstream::forward)),
        state.interceptor(),
    );

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .merge(filtered)
        .with_state(state)
}

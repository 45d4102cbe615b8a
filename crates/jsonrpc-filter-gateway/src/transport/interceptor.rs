//! JSON-RPC request interceptor (axum middleware).
//!
//! Per request, exactly one of: forward to `next`, 403, or 500.
//!
//! 1. Capture the body (replayable on every path). Read failure => 500 + error text.
//! 2. Classify: single object, then batch array.
//! 3. Single: 403 `JSON-RPC method blocked` unless allowed.
//!    Batch: 403 `JSON-RPC methods blocked` if oversized or any call disallowed.
//! 4. Anything else (not JSON, other JSON shapes) is forwarded without a
//!    policy check. This fail-open branch keeps non-JSON-RPC traffic on the
//!    same route working, and also means such bodies are never filtered.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use jsonrpc_filter_core::protocol::{classify, Payload};

use crate::obs::FilterMetrics;
use crate::policy::{BlockReason, FilterPolicy, PolicyDecision};

use super::body;

/// Shared, immutable interceptor state.
pub struct Interceptor {
    policy: FilterPolicy,
    max_body_bytes: usize,
    metrics: Arc<FilterMetrics>,
}

impl Interceptor {
    pub fn new(policy: FilterPolicy, max_body_bytes: usize, metrics: Arc<FilterMetrics>) -> Self {
        Self {
            policy,
            max_body_bytes,
            metrics,
        }
    }

    fn record(&self, outcome: &str, shape: &str, reason: &str) {
        self.metrics.decisions.inc(&[
            ("outcome", outcome),
            ("shape", shape),
            ("reason", reason),
        ]);
    }
}

/// Wrap every route of `router` with the interceptor.
pub fn apply<S>(router: Router<S>, interceptor: Arc<Interceptor>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(interceptor, intercept))
}

pub async fn intercept(
    State(filter): State<Arc<Interceptor>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (req, read) = body::capture(req, filter.max_body_bytes).await;

    let bytes = match read {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "request body read failed");
            filter.record("error", "unread", "body_read");
            return text_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let payload = classify(&bytes);

    match filter.policy.evaluate(&payload) {
        PolicyDecision::Pass => {
            tracing::debug!(
                shape = payload.kind(),
                calls = payload.call_count(),
                bytes = bytes.len(),
                "json-rpc request forwarded"
            );
            filter.record("forward", payload.kind(), "none");
            next.run(req).await
        }
        PolicyDecision::Block { reason, msg } => {
            log_block(&filter.policy, &payload, reason);
            filter.record("blocked", payload.kind(), reason.as_str());
            text_response(StatusCode::FORBIDDEN, msg)
        }
    }
}

fn log_block(policy: &FilterPolicy, payload: &Payload, reason: BlockReason) {
    match payload {
        Payload::Single(call) => {
            tracing::warn!(method = %call.method(), reason = reason.as_str(), "json-rpc method blocked");
        }
        Payload::Batch(calls) => {
            let denied: Vec<&str> = calls
                .iter()
                .filter(|c| policy.is_single_blocked(c))
                .map(|c| c.method())
                .collect();
            tracing::warn!(
                batch_len = calls.len(),
                limit = policy.batched_request_limit(),
                denied = ?denied,
                reason = reason.as_str(),
                "json-rpc batch blocked"
            );
        }
        Payload::Unclassified => {}
    }
}

fn text_response(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.into(),
    )
        .into_response()
}

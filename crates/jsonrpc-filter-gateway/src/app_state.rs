//! Shared application state for the filter gateway.
//!
//! Everything here is built once at startup and only read afterwards.

use std::sync::Arc;
use std::time::Duration;

use jsonrpc_filter_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::FilterMetrics;
use crate::policy::FilterPolicy;
use crate::transport::Interceptor;
use crate::upstream::Upstream;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    interceptor: Arc<Interceptor>,
    upstream: Upstream,
    metrics: Arc<FilterMetrics>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        // 1) Compile policy (empty allowlist aborts here)
        let policy = FilterPolicy::new(&cfg.filter)?;

        tracing::info!(
            methods = policy.allowed_methods(),
            batched_request_limit = policy.batched_request_limit(),
            "json-rpc filter policy compiled"
        );

        // 2) Interceptor + upstream
        let metrics = Arc::new(FilterMetrics::default());
        let interceptor = Arc::new(Interceptor::new(
            policy,
            cfg.gateway.max_body_bytes,
            Arc::clone(&metrics),
        ));
        let upstream = Upstream::new(
            &cfg.gateway.upstream,
            Duration::from_millis(cfg.gateway.upstream_timeout_ms),
        )?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                interceptor,
                upstream,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn interceptor(&self) -> Arc<Interceptor> {
        Arc::clone(&self.inner.interceptor)
    }

    pub fn upstream(&self) -> &Upstream {
        &self.inner.upstream
    }

    pub fn metrics(&self) -> &FilterMetrics {
        &self.inner.metrics
    }
}

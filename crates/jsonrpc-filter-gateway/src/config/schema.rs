use serde::Deserialize;
use jsonrpc_filter_core::error::{FilterError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub filter: FilterConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FilterError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.filter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_upstream")]
    pub upstream: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            upstream: default_upstream(),
            max_body_bytes: default_max_body_bytes(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(self.upstream.starts_with("http://") || self.upstream.starts_with("https://")) {
            return Err(FilterError::Config(
                "gateway.upstream must be an http:// or https:// URL".into(),
            ));
        }
        if !(1024..=64 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(FilterError::Config(
                "gateway.max_body_bytes must be between 1024 and 67108864".into(),
            ));
        }
        if !(100..=600000).contains(&self.upstream_timeout_ms) {
            return Err(FilterError::Config(
                "gateway.upstream_timeout_ms must be between 100 and 600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_upstream() -> String {
    "http://127.0.0.1:8545".into()
}
fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}
fn default_upstream_timeout_ms() -> u64 {
    30000
}

/// Filter policy settings. Key names follow the plugin convention
/// (`allowlist`, `batchedRequestLimit`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FilterConfig {
    pub allowlist: Vec<String>,

    #[serde(default = "default_batched_request_limit")]
    pub batched_request_limit: usize,
}

impl FilterConfig {
    pub fn new(allowlist: Vec<String>, batched_request_limit: usize) -> Self {
        Self {
            allowlist,
            batched_request_limit,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.allowlist.is_empty() {
            return Err(FilterError::Config("allowlist cannot be empty".into()));
        }
        if self.batched_request_limit == 0 {
            return Err(FilterError::Config(
                "filter.batchedRequestLimit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_batched_request_limit() -> usize {
    1
}

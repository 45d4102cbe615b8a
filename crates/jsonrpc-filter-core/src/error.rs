//! Shared error type across jsonrpc-filter crates.

use thiserror::Error;

/// Stable error codes, used in logs and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid or incomplete configuration.
    BadConfig,
    /// Request body could not be read.
    BodyRead,
    /// Upstream backend unreachable or failed.
    Upstream,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::BodyRead => "BODY_READ",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Unified error type used by core and gateway.
///
/// Policy blocks are not errors: they are a normal `PolicyDecision`.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    BodyRead(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FilterError {
    /// Map internal error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FilterError::Config(_) => ClientCode::BadConfig,
            FilterError::BodyRead(_) => ClientCode::BodyRead,
            FilterError::Upstream(_) => ClientCode::Upstream,
            FilterError::Internal(_) => ClientCode::Internal,
        }
    }
}

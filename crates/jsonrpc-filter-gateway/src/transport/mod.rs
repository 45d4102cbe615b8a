//! Transport layer (HTTP).
//!
//! Captures the request body once, keeps it replayable, and runs the policy
//! before the request reaches the next handler.

pub mod body;
pub mod interceptor;

pub use interceptor::{intercept, Interceptor};

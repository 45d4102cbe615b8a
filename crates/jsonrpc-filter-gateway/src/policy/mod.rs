//! Policy layer (method allowlist, batch size cap).
//!
//! Compiles the filter configuration into an immutable evaluator that the
//! interceptor shares across concurrent requests.

pub mod allowlist;
pub mod engine;

pub use engine::{BlockReason, FilterPolicy, PolicyDecision};

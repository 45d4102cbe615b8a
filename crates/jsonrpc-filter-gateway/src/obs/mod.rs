//! Lightweight in-process counters (dependency-free rendering).
//!
//! Decision counters are stored as atomics and rendered by the `/metrics`
//! handler in Prometheus text format.

pub mod metrics;

pub use metrics::{CounterVec, FilterMetrics};

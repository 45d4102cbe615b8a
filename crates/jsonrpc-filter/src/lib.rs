//! Top-level facade crate for jsonrpc-filter.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use jsonrpc_filter_core::*;
}

pub mod gateway {
    pub use jsonrpc_filter_gateway::*;
}

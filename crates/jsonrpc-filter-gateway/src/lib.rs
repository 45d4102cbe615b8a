//! jsonrpc-filter gateway library entry.
//!
//! This crate wires configuration, the method policy, the body-replaying
//! interceptor and the upstream forwarder into an HTTP filter stack. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod transport;
pub mod upstream;

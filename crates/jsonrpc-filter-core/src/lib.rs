//! jsonrpc-filter core: transport-agnostic JSON-RPC call primitives and errors.
//!
//! This crate defines the call descriptor, the single/batch payload
//! classification and the error surface shared by the gateway and its tests.
//! It carries no HTTP or runtime dependencies so the decision inputs can be
//! produced from any byte source.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Classification never fails: payloads it cannot read surface as
//! `Payload::Unclassified` instead of an error or a panic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{FilterError, Result};

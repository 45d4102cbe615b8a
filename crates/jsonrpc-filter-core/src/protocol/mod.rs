//! JSON-RPC request shapes.
//!
//! - `call`: the call descriptor (only `method` matters for policy).
//! - `payload`: classification of a raw body into single, batch or unclassified.
//! - `repair`: U+FFFD substitution for text `serde_json` would reject.
//!
//! Both are panic-free: malformed input never errors out of `classify`, it
//! simply ends up `Unclassified`.

pub mod call;
pub mod payload;
pub mod repair;

pub use call::CallDescriptor;
pub use payload::{classify, Payload};

//! Single vs. batch classification of a raw request body.
//!
//! Two typed decode attempts, in order: one call object, then an array of
//! call objects. A body that fits neither is `Unclassified` and is left to
//! the caller (the gateway forwards it untouched).
//!
//! Decoding runs on a `repair`ed view of the bytes, so invalid UTF-8 or lone
//! surrogate escapes in keys or method names do not knock a call out of
//! classification.

use super::call::CallDescriptor;
use super::repair::repair;

/// Result of classifying a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Exactly one call (JSON object, or `null`).
    Single(CallDescriptor),
    /// Ordered sequence of calls (JSON array). May be empty.
    Batch(Vec<CallDescriptor>),
    /// Not JSON, or JSON of another shape.
    Unclassified,
}

impl Payload {
    /// Static label for logs and counters.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Single(_) => "single",
            Payload::Batch(_) => "batch",
            Payload::Unclassified => "unclassified",
        }
    }

    /// Number of calls carried. `Unclassified` carries none.
    pub fn call_count(&self) -> usize {
        match self {
            Payload::Single(_) => 1,
            Payload::Batch(calls) => calls.len(),
            Payload::Unclassified => 0,
        }
    }
}

/// Classify raw body bytes. Never fails.
pub fn classify(body: &[u8]) -> Payload {
    let body = repair(body);
    if let Ok(call) = serde_json::from_slice::<CallDescriptor>(&body) {
        return Payload::Single(call);
    }
    if let Ok(calls) = serde_json::from_slice::<Vec<CallDescriptor>>(&body) {
        return Payload::Batch(calls);
    }
    Payload::Unclassified
}

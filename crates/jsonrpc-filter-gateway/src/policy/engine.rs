use jsonrpc_filter_core::error::Result;
use jsonrpc_filter_core::protocol::{CallDescriptor, Payload};

use crate::config::schema::FilterConfig;

use super::allowlist::MethodAllowlist;

/// Response body for a rejected single call.
pub const SINGLE_BLOCKED_MSG: &str = "JSON-RPC method blocked";
/// Response body for a rejected batch.
pub const BATCH_BLOCKED_MSG: &str = "JSON-RPC methods blocked";

/// Why a payload was blocked. Only surfaces in logs and counters;
/// clients see the fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    MethodNotAllowed,
    BatchTooLarge,
}

impl BlockReason {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockReason::MethodNotAllowed => "method_not_allowed",
            BlockReason::BatchTooLarge => "batch_too_large",
        }
    }
}

/// Decision from policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Pass,
    Block { reason: BlockReason, msg: &'static str },
}

/// Immutable filter policy.
/// Construct once at startup, then share via Arc.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    allowlist: MethodAllowlist,
    batched_request_limit: usize,
}

impl FilterPolicy {
    /// Fails when the allowlist is empty or the batch limit is zero.
    pub fn new(cfg: &FilterConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            allowlist: MethodAllowlist::compile(&cfg.allowlist)?,
            batched_request_limit: cfg.batched_request_limit,
        })
    }

    pub fn allowed_methods(&self) -> usize {
        self.allowlist.method_count()
    }

    pub fn batched_request_limit(&self) -> usize {
        self.batched_request_limit
    }

    /// True iff the call's method is not in the allowlist.
    pub fn is_single_blocked(&self, call: &CallDescriptor) -> bool {
        !self.allowlist.contains(call.method())
    }

    /// True if the batch is over the limit or any call is blocked.
    /// An empty batch is never blocked.
    pub fn is_batch_blocked(&self, calls: &[CallDescriptor]) -> bool {
        self.batch_block_reason(calls).is_some()
    }

    fn batch_block_reason(&self, calls: &[CallDescriptor]) -> Option<BlockReason> {
        if calls.len() > self.batched_request_limit {
            return Some(BlockReason::BatchTooLarge);
        }
        if calls.iter().any(|c| self.is_single_blocked(c)) {
            return Some(BlockReason::MethodNotAllowed);
        }
        None
    }

    /// Evaluate a classified payload. `Unclassified` always passes.
    pub fn evaluate(&self, payload: &Payload) -> PolicyDecision {
        match payload {
            Payload::Single(call) => {
                if self.is_single_blocked(call) {
                    return PolicyDecision::Block {
                        reason: BlockReason::MethodNotAllowed,
                        msg: SINGLE_BLOCKED_MSG,
                    };
                }
                PolicyDecision::Pass
            }
            Payload::Batch(calls) => match self.batch_block_reason(calls) {
                Some(reason) => PolicyDecision::Block {
                    reason,
                    msg: BATCH_BLOCKED_MSG,
                },
                None => PolicyDecision::Pass,
            },
            Payload::Unclassified => PolicyDecision::Pass,
        }
    }
}

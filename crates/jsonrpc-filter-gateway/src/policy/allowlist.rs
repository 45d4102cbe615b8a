//! Method allowlist compilation and matching.
//!
//! Entries are matched exactly and case-sensitively. Duplicates collapse.

use std::collections::HashSet;

use jsonrpc_filter_core::error::{FilterError, Result};

/// Compiled set of permitted method names.
#[derive(Debug, Clone)]
pub struct MethodAllowlist {
    methods: HashSet<String>,
}

impl MethodAllowlist {
    pub fn compile(raw: &[String]) -> Result<Self> {
        if raw.is_empty() {
            return Err(FilterError::Config("allowlist cannot be empty".into()));
        }
        Ok(Self {
            methods: raw.iter().cloned().collect(),
        })
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    /// Distinct method names.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

//! Evaluator limits.

use serde::Deserialize;

pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000;
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Resource limits for one evaluator instance.
///
/// Hosts can load this from JSON; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum number of evaluation steps.
    pub gas_limit: u64,
    /// Maximum nesting of function calls. Each call nests several native
    /// frames, so the default stays well inside a 2 MiB thread stack.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl EvalConfig {
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

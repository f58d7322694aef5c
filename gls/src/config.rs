use serde::{Deserialize, Serialize};

/// Configuration for the GLS optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GLSConfig {
    /// Whether to refine the greedy solution with the 1-swap local search
    pub local_search: bool,
    /// Recompute the total value after every swap and revert it if the value did not strictly increase
    pub verify_swaps: bool,
    /// Maximum number of local search passes. If undefined, the local search runs until a local optimum is reached
    #[serde(default)]
    pub max_passes: Option<usize>,
}

impl Default for GLSConfig {
    fn default() -> Self {
        Self {
            local_search: true,
            verify_swaps: true,
            max_passes: None,
        }
    }
}

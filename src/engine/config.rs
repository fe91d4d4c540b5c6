//! Engine configuration.
use serde::{Deserialize, Serialize};

/// Tunables for an [`Engine`](super::Engine). Every field has a default, so a
/// partial JSON document (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the samples a single resampling request may produce.
    pub max_output_samples: usize,
    /// Whether batches fan out across the rayon thread pool.
    pub parallel_batches: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_output_samples: 1_000_000, parallel_batches: true }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

//! A configured entry point for running transformation requests, singly or in batches.
pub mod config;
pub mod request;

pub use config::EngineConfig;
pub use request::TransformRequest;

use crate::transform::{self, TransformationError, TransformationResult};
use rayon::prelude::*;
use tracing::debug;

/// Holds configuration only; every run is independent, so an `Engine` can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Executes a single request.
    pub fn run(&self, request: &TransformRequest) -> Result<TransformationResult, TransformationError> {
        transform::transform_with(&self.config, request.transformation, &request.inputs, &request.parameters)
    }

    /// Executes independent requests. Results are returned in request order;
    /// a failing request does not affect the others.
    pub fn run_batch(&self, requests: &[TransformRequest]) -> Vec<Result<TransformationResult, TransformationError>> {
        debug!(requests = requests.len(), parallel = self.config.parallel_batches, "running transformation batch");
        if self.config.parallel_batches {
            requests.par_iter().map(|r| self.run(r)).collect()
        } else {
            requests.iter().map(|r| self.run(r)).collect()
        }
    }
}

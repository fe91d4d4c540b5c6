//! The transformation variants and the dispatcher that selects between them.
//!
//! Every variant is a pure function of its inputs and parameters. The
//! dispatcher checks the input cardinality for the requested variant and
//! that every sample matches its series' declared kind, then hands over; it returns the variant's result unchanged.
pub mod error;
pub mod fourier;
pub mod params;
pub mod quadrants;
pub mod resample;
pub mod result;

pub use error::TransformationError;
pub use params::Parameters;
pub use result::{ProvenanceEntry, TransformationResult};

use crate::engine::EngineConfig;
use crate::series::Series;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// The closed set of transformations the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransformationType {
    ResampleNearest,
    Quadrants,
    Fourier,
}

impl TransformationType {
    pub const ALL: [TransformationType; 3] =
        [TransformationType::ResampleNearest, TransformationType::Quadrants, TransformationType::Fourier];

    /// The wire name, also recorded as `transformationName` in the output's extra.
    pub fn name(&self) -> &'static str {
        match self {
            TransformationType::ResampleNearest => resample::NAME,
            TransformationType::Quadrants => quadrants::NAME,
            TransformationType::Fourier => fourier::NAME,
        }
    }

    /// Checks the number of input series this variant accepts.
    fn check_cardinality(&self, count: usize) -> Result<(), TransformationError> {
        let (ok, expected) = match self {
            TransformationType::ResampleNearest => (count == 1, "exactly 1"),
            TransformationType::Quadrants => (count == 2, "exactly 2"),
            TransformationType::Fourier => (count >= 1, "at least 1"),
        };
        if ok {
            Ok(())
        } else {
            Err(TransformationError::invalid(format!(
                "{} takes {} input series, got {}",
                self.name(),
                expected,
                count
            )))
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformationType {
    type Err = TransformationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TransformationError::invalid(format!("unknown transformation '{}'", s)))
    }
}

impl TryFrom<String> for TransformationType {
    type Error = TransformationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TransformationType> for String {
    fn from(t: TransformationType) -> Self {
        t.name().to_string()
    }
}

/// Every sample must carry the position tag its series declares.
fn check_uniform(inputs: &[Series]) -> Result<(), TransformationError> {
    match inputs.iter().find(|s| !s.is_uniform()) {
        Some(bad) => Err(TransformationError::invalid(format!(
            "series '{}' is declared {:?} but holds samples of another kind",
            bad.label, bad.kind
        ))),
        None => Ok(()),
    }
}

/// Runs the named transformation with default engine limits.
pub fn transform(
    name: TransformationType,
    inputs: &[Series],
    params: &Parameters,
) -> Result<TransformationResult, TransformationError> {
    transform_with(&EngineConfig::default(), name, inputs, params)
}

/// Runs the named transformation under the given configuration.
///
/// # Errors
/// - `InvalidRequest` for wrong cardinality, bad parameters, mismatched, mixed-kind or unsorted inputs.
/// - `DataError` when a sample the variant reads is not numeric.
pub fn transform_with(
    config: &EngineConfig,
    name: TransformationType,
    inputs: &[Series],
    params: &Parameters,
) -> Result<TransformationResult, TransformationError> {
    let outcome = name
        .check_cardinality(inputs.len())
        .and_then(|()| check_uniform(inputs))
        .and_then(|()| match name {
            TransformationType::ResampleNearest => {
                resample::resample_nearest(&inputs[0], params, config.max_output_samples)
            }
            TransformationType::Quadrants => quadrants::quadrants(&inputs[0], &inputs[1], params),
            TransformationType::Fourier => fourier::fourier(inputs, params),
        });

    match &outcome {
        Ok(result) => debug!(
            transformation = %name,
            inputs = inputs.len(),
            output_samples = result.len(),
            "transformation completed"
        ),
        Err(e) => warn!(transformation = %name, inputs = inputs.len(), error = %e, "transformation rejected"),
    }
    outcome
}

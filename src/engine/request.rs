//! The envelope an orchestration layer hands to the engine.
use crate::series::Series;
use crate::transform::{Parameters, TransformationType};
use serde::{Deserialize, Serialize};

/// One transformation call: which variant, over which series, with which parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub transformation: TransformationType,
    pub inputs: Vec<Series>,
    #[serde(default)]
    pub parameters: Parameters,
}

impl TransformRequest {
    pub fn new(transformation: TransformationType, inputs: Vec<Series>, parameters: Parameters) -> Self {
        Self { transformation, inputs, parameters }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sorts every input series by position, for callers that cannot guarantee order upstream.
    pub fn sort_inputs(&mut self) {
        for series in &mut self.inputs {
            series.sort_by_position();
        }
    }
}

// Signal-series transformation engine.
// Derives new time/frequency-indexed series from stored ones and reports,
// for every derived sample, which stored samples it came from.

pub mod engine;
pub mod lineage;
pub mod series;
pub mod transform;

pub use engine::{Engine, EngineConfig, TransformRequest};
pub use lineage::Lineage;
pub use series::{Position, Sample, SampleValue, Series, SeriesKind, SourceId};
pub use transform::{
    transform, transform_with, Parameters, TransformationError, TransformationResult, TransformationType,
};

//! The records the engine consumes and produces: positions, samples and series.
pub mod position;
pub mod types;

// Re-export key types for convenient access
pub use position::{Position, SeriesKind};
pub use types::{Extra, Sample, SampleValue, Series, SourceId};

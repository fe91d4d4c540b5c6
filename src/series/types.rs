use super::position::{Position, SeriesKind};
use crate::transform::error::TransformationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered key/value annotations carried alongside samples and series.
pub type Extra = Vec<(String, String)>;

/// Opaque identifier of the stored value a sample originates from.
///
/// Never interpreted by the engine; only compared, ordered and hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The placeholder carried by derived samples until the store assigns a real id.
    pub fn unsaved() -> Self {
        Self(String::new())
    }

    pub fn is_unsaved(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A stored sample value. Backends hand values over either as numbers or as
/// their textual rendering, so both are accepted and parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(f64),
    Text(String),
}

impl From<f64> for SampleValue {
    fn from(v: f64) -> Self {
        SampleValue::Number(v)
    }
}

impl From<&str> for SampleValue {
    fn from(v: &str) -> Self {
        SampleValue::Text(v.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub position: Position,
    pub value: SampleValue,
    pub source_id: SourceId,
    #[serde(default)]
    pub extra: Extra,
}

impl Sample {
    pub fn new(position: Position, value: impl Into<SampleValue>, source_id: impl Into<SourceId>) -> Self {
        Self { position, value: value.into(), source_id: source_id.into(), extra: Extra::new() }
    }

    /// A transformation output that has not been persisted yet.
    pub fn derived(position: Position, value: f64) -> Self {
        Self::new(position, value, SourceId::unsaved())
    }

    /// Reads the value as a finite number.
    ///
    /// # Errors
    /// `DataError` if the value is text that does not parse, or is NaN/infinite.
    pub fn numeric(&self) -> Result<f64, TransformationError> {
        let parsed = match &self.value {
            SampleValue::Number(v) => Some(*v),
            SampleValue::Text(s) => s.trim().parse::<f64>().ok(),
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(TransformationError::DataError {
                source_id: self.source_id.clone(),
                value: match &self.value {
                    SampleValue::Number(v) => v.to_string(),
                    SampleValue::Text(s) => s.clone(),
                },
            }),
        }
    }
}

/// A labelled, position-indexed sequence of samples.
///
/// Input ordering is not guaranteed; each transformation states the order it
/// requires (see [`Series::is_sorted`] and [`Series::sort_by_position`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub kind: SeriesKind,
    pub label: String,
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub extra: Extra,
}

impl Series {
    pub fn new(kind: SeriesKind, label: impl Into<String>) -> Self {
        Self { kind, label: label.into(), samples: Vec::new(), extra: Extra::new() }
    }

    pub fn with_samples(kind: SeriesKind, label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { samples, ..Self::new(kind, label) }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when samples ascend (non-strictly) by their leading coordinate.
    pub fn is_sorted(&self) -> bool {
        self.samples
            .windows(2)
            .all(|w| w[0].position.cmp_begin(&w[1].position).is_le())
    }

    /// Stable sort by leading coordinate. Samples sharing a coordinate keep their input order.
    pub fn sort_by_position(&mut self) {
        self.samples.sort_by(|a, b| a.position.cmp_begin(&b.position));
    }

    /// True when every sample's position tag matches the series kind.
    pub fn is_uniform(&self) -> bool {
        self.samples.iter().all(|s| s.position.kind() == self.kind)
    }

    /// The extra annotations of this series followed by the transformation marker.
    pub(crate) fn tagged_extra(&self, transformation_name: &str) -> Extra {
        let mut extra = self.extra.clone();
        extra.push(("transformationName".to_string(), transformation_name.to_string()));
        extra
    }
}

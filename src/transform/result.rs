//! The output of a transformation: an unsaved series plus its provenance.
use crate::series::{Sample, Series, SourceId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The source ids behind one derived sample. Resample and Fourier produce one,
/// Quadrants two, so the common case never allocates.
pub type ProvenanceEntry = SmallVec<[SourceId; 2]>;

/// A derived series and, index for index, the samples it was derived from.
///
/// Invariant: `provenance.len() == output_series.samples.len()`. The engine
/// builds results only through [`TransformationResult::push`], which keeps the
/// two in step; callers editing the public fields directly must preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationResult {
    pub output_series: Series,
    pub provenance: Vec<ProvenanceEntry>,
}

impl TransformationResult {
    pub(crate) fn new(output_series: Series) -> Self {
        Self { output_series, provenance: Vec::new() }
    }

    pub(crate) fn with_capacity(output_series: Series, capacity: usize) -> Self {
        let mut result = Self::new(output_series);
        result.output_series.samples.reserve(capacity);
        result.provenance.reserve(capacity);
        result
    }

    pub(crate) fn push(&mut self, sample: Sample, sources: ProvenanceEntry) {
        debug_assert!(!sources.is_empty(), "provenance entries name at least one source");
        self.output_series.samples.push(sample);
        self.provenance.push(sources);
    }

    pub fn len(&self) -> usize {
        self.provenance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provenance.is_empty()
    }

    /// Pairs each derived sample with its sources.
    pub fn iter(&self) -> impl Iterator<Item = (&Sample, &[SourceId])> {
        self.output_series
            .samples
            .iter()
            .zip(self.provenance.iter().map(|p| p.as_slice()))
    }
}

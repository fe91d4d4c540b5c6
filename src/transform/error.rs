//! Defines the error types for the transformation engine.
use crate::series::SourceId;
use thiserror::Error;

/// Why a transformation request was refused.
///
/// Both variants are fatal to the single request; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformationError {
    /// Wrong cardinality, a missing or malformed parameter, mismatched or
    /// unsorted inputs, or an unknown transformation name.
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },
    /// A sample value could not be read as a number.
    #[error("Sample '{source_id}' has non-numeric value '{value}'")]
    DataError { source_id: SourceId, value: String },
}

impl TransformationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TransformationError::InvalidRequest { reason: reason.into() }
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, TransformationError::InvalidRequest { .. })
    }
}

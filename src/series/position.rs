//! Defines where a sample sits on the time or frequency axis.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The axis anchor of a single sample.
///
/// Two positions are equal only when they carry the same tag and the same
/// coordinates: an `Instant(5.0)` never equals an `Interval(5.0, 5.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// A single point in time ("timestamp").
    Instant(f64),
    /// A start/end range in time ("epoch").
    Interval { start: f64, end: f64 },
    /// A point on the frequency axis.
    FrequencyInstant(f64),
}

impl Position {
    /// The leading coordinate: `t` for an instant, `start` for an interval.
    #[inline(always)]
    pub fn begin(&self) -> f64 {
        match *self {
            Position::Instant(t) => t,
            Position::Interval { start, .. } => start,
            Position::FrequencyInstant(f) => f,
        }
    }

    /// The trailing coordinate: `t` for an instant, `end` for an interval.
    #[inline(always)]
    pub fn end(&self) -> f64 {
        match *self {
            Position::Instant(t) => t,
            Position::Interval { end, .. } => end,
            Position::FrequencyInstant(f) => f,
        }
    }

    pub fn kind(&self) -> SeriesKind {
        match self {
            Position::Instant(_) => SeriesKind::Instant,
            Position::Interval { .. } => SeriesKind::Interval,
            Position::FrequencyInstant(_) => SeriesKind::FrequencyInstant,
        }
    }

    /// Total order on the leading coordinate, used for sorting and sortedness checks.
    pub fn cmp_begin(&self, other: &Position) -> Ordering {
        self.begin().total_cmp(&other.begin())
    }
}

/// The uniform position tag of every sample in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Instant,
    Interval,
    FrequencyInstant,
}

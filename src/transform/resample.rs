//! Fixed-period resampling by nearest available sample.
use super::error::TransformationError;
use super::params::Parameters;
use super::result::TransformationResult;
use crate::series::{Position, Sample, Series, SeriesKind};
use smallvec::smallvec;

pub const NAME: &str = "resampleNearest";

/// Up-front reservation cap; larger outputs grow as they are produced.
const PREALLOCATE_LIMIT: usize = 1 << 16;

/// Produces an instant series with one sample every `period`, each copied
/// from the nearest input sample in time.
///
/// Parameters: `period` (required positive integer), `start` (default 0),
/// `end` (default `period` past the end of the last input sample).
///
/// The input must already ascend by position. A single cursor walks it
/// forward alongside the target instants, so the cost is O(n + k). When the
/// previous sample is at least as close as the cursor's sample, the previous
/// one is reused.
pub fn resample_nearest(
    input: &Series,
    params: &Parameters,
    max_output_samples: usize,
) -> Result<TransformationResult, TransformationError> {
    if !input.is_sorted() {
        return Err(TransformationError::invalid(format!(
            "series '{}' must be sorted ascending by position",
            input.label
        )));
    }

    let period = params.require_positive_integer("period")? as f64;
    let start = params.number_or("start", 0.0)?;
    let explicit_end = params.number("end")?;

    let mut output = Series::new(SeriesKind::Instant, input.label.clone());
    output.extra = input.tagged_extra(NAME);

    let samples = &input.samples;
    let last = match samples.last() {
        Some(last) => last,
        // No candidates to pick from, whatever the requested range.
        None => return Ok(TransformationResult::new(output)),
    };
    let end = explicit_end.unwrap_or(period + last.position.end());

    let expected = if end > start { ((end - start) / period).ceil() } else { 0.0 };
    if expected > max_output_samples as f64 {
        return Err(TransformationError::invalid(format!(
            "resampling [{}, {}) every {} yields {} samples, above the limit of {}",
            start, end, period, expected, max_output_samples
        )));
    }

    let n = samples.len();
    let mut result = TransformationResult::with_capacity(output, (expected as usize).min(PREALLOCATE_LIMIT));
    let mut cursor = 0usize;
    let mut step = 0u64;

    loop {
        // Computed from the step count rather than accumulated, so targets do not drift.
        let t = start + step as f64 * period;
        if t >= end {
            break;
        }

        while cursor + 1 < n && samples[cursor].position.begin() < t {
            cursor += 1;
        }

        let mut chosen = &samples[cursor];
        if cursor > 0 {
            let previous = &samples[cursor - 1];
            let d_prev = (t - previous.position.end()).abs();
            let d_cand = (chosen.position.begin() - t).abs();
            if d_prev <= d_cand {
                chosen = previous;
            }
        }

        let value = chosen.numeric()?;
        result.push(Sample::derived(Position::Instant(t), value), smallvec![chosen.source_id.clone()]);
        step += 1;
    }

    Ok(result)
}

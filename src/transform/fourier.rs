//! One-sided amplitude spectrum of instant series.
use super::error::TransformationError;
use super::params::Parameters;
use super::result::TransformationResult;
use crate::series::{Position, Sample, Series, SeriesKind};
use num_complex::Complex;
use rustfft::FftPlanner;
use smallvec::smallvec;

pub const NAME: &str = "fourier";

/// Computes the amplitude spectrum `|X_k| / N` for `k = 0 ..= N/2` of every
/// input series and concatenates them, in input order, into one
/// frequency-instant series.
///
/// Each series is first put in ascending time order (stable, so duplicate
/// timestamps keep their input order). Bin `k` sits at frequency `k * fs / N`
/// and is traced back to the `k`-th sample of the sorted series. The sample
/// rate `fs` is the `sampleRate` parameter when given, otherwise derived from
/// the mean spacing of the timestamps, falling back to 1.
pub fn fourier(inputs: &[Series], params: &Parameters) -> Result<TransformationResult, TransformationError> {
    let first = inputs
        .first()
        .ok_or_else(|| TransformationError::invalid("fourier needs at least one input series"))?;
    if let Some(bad) = inputs.iter().find(|s| s.kind != SeriesKind::Instant) {
        return Err(TransformationError::invalid(format!(
            "fourier needs Instant series, '{}' is {:?}",
            bad.label, bad.kind
        )));
    }
    let sample_rate = params.positive_number("sampleRate")?;

    let mut output = Series::new(SeriesKind::FrequencyInstant, first.label.clone());
    output.extra = first.tagged_extra(NAME);
    let capacity = inputs.iter().map(|s| s.len() / 2 + 1).sum();
    let mut result = TransformationResult::with_capacity(output, capacity);

    let mut planner = FftPlanner::<f64>::new();
    for series in inputs {
        let mut ordered: Vec<&Sample> = series.samples.iter().collect();
        ordered.sort_by(|a, b| a.position.cmp_begin(&b.position));
        let n = ordered.len();
        if n == 0 {
            continue;
        }

        let mut buffer = ordered
            .iter()
            .map(|s| s.numeric().map(|v| Complex::new(v, 0.0)))
            .collect::<Result<Vec<_>, _>>()?;
        planner.plan_fft_forward(n).process(&mut buffer);

        let fs = sample_rate.unwrap_or_else(|| derived_sample_rate(&ordered));
        let scale = 1.0 / n as f64;
        for (k, bin) in buffer.iter().take(n / 2 + 1).enumerate() {
            let frequency = k as f64 * fs * scale;
            result.push(
                Sample::derived(Position::FrequencyInstant(frequency), bin.norm() * scale),
                smallvec![ordered[k].source_id.clone()],
            );
        }
    }

    Ok(result)
}

/// Samples per time unit, from the span of the (sorted) timestamps.
fn derived_sample_rate(ordered: &[&Sample]) -> f64 {
    let n = ordered.len();
    if n < 2 {
        return 1.0;
    }
    let span = ordered[n - 1].position.begin() - ordered[0].position.begin();
    if span > 0.0 {
        (n - 1) as f64 / span
    } else {
        1.0
    }
}

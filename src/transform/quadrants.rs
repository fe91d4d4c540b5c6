//! Cartesian quadrant classification of position-aligned sample pairs.
use super::error::TransformationError;
use super::params::Parameters;
use super::result::TransformationResult;
use crate::series::{Sample, Series};
use smallvec::smallvec;

pub const NAME: &str = "quadrants";

/// Quadrant numbering, indexed by `(x >= origin_x, y >= origin_y)`.
#[inline(always)]
fn quadrant_code(x_pos: bool, y_pos: bool) -> u8 {
    match (x_pos, y_pos) {
        (true, true) => 1,
        (false, true) => 2,
        (false, false) => 3,
        (true, false) => 4,
    }
}

/// Pairs each sample of `x` with the sample of `y` at the identical position
/// and emits its quadrant code (1-4) relative to `(originX, originY)`.
///
/// Samples of `x` without an exact positional match in `y` are skipped. Both
/// series must be sorted and share a kind; they are merged in a single
/// forward pass.
pub fn quadrants(x: &Series, y: &Series, params: &Parameters) -> Result<TransformationResult, TransformationError> {
    if x.kind != y.kind {
        return Err(TransformationError::invalid(format!(
            "quadrants needs series of the same kind, got {:?} ('{}') and {:?} ('{}')",
            x.kind, x.label, y.kind, y.label
        )));
    }
    for series in [x, y] {
        if !series.is_sorted() {
            return Err(TransformationError::invalid(format!(
                "series '{}' must be sorted ascending by position",
                series.label
            )));
        }
    }

    let origin_x = params.number_or("originX", 0.0)?;
    let origin_y = params.number_or("originY", 0.0)?;

    let mut output = Series::new(x.kind, x.label.clone());
    output.extra = x.tagged_extra(NAME);
    let mut result = TransformationResult::with_capacity(output, x.len().min(y.len()));

    let ys = &y.samples;
    let mut j = 0usize;
    for xs in &x.samples {
        let begin = xs.position.begin();
        while j < ys.len() && ys[j].position.begin() < begin {
            j += 1;
        }
        let Some(partner) = ys.get(j) else {
            // Y is exhausted; no later X can match either.
            break;
        };
        if partner.position != xs.position {
            continue;
        }

        let x_pos = xs.numeric()? >= origin_x;
        let y_pos = partner.numeric()? >= origin_y;
        result.push(
            Sample::derived(xs.position, quadrant_code(x_pos, y_pos) as f64),
            smallvec![xs.source_id.clone(), partner.source_id.clone()],
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Position, SampleValue, SeriesKind};
    use rstest::rstest;

    fn instant_series(label: &str, points: &[(f64, f64, &str)]) -> Series {
        Series::with_samples(
            SeriesKind::Instant,
            label,
            points.iter().map(|&(t, v, id)| Sample::new(Position::Instant(t), v, id)).collect(),
        )
    }

    fn codes(result: &TransformationResult) -> Vec<f64> {
        result
            .output_series
            .samples
            .iter()
            .map(|s| match s.value {
                SampleValue::Number(v) => v,
                _ => panic!("quadrants emits numbers"),
            })
            .collect()
    }

    #[test]
    fn test_documented_example() {
        let x = instant_series("x", &[(0.0, 5.0, "A"), (1.0, -3.0, "B"), (2.0, 4.0, "C")]);
        let y = instant_series("y", &[(0.0, 2.0, "D"), (1.0, -1.0, "E"), (2.0, -5.0, "F")]);
        let params = Parameters::new().with("originX", "0").with("originY", "0");
        let result = quadrants(&x, &y, &params).unwrap();

        assert_eq!(codes(&result), vec![1.0, 3.0, 4.0]);
        let pairs: Vec<Vec<&str>> = result.provenance.iter().map(|p| p.iter().map(|id| id.as_str()).collect()).collect();
        assert_eq!(pairs, vec![vec!["A", "D"], vec!["B", "E"], vec!["C", "F"]]);
        let times: Vec<f64> = result.output_series.samples.iter().map(|s| s.position.begin()).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[rstest]
    #[case(1.0, 1.0, 1.0)]
    #[case(-1.0, 1.0, 2.0)]
    #[case(-1.0, -1.0, 3.0)]
    #[case(1.0, -1.0, 4.0)]
    #[case(0.0, 0.0, 1.0)] // the origin itself counts as non-negative
    #[case(0.0, -0.5, 4.0)]
    fn test_code_per_quadrant(#[case] xv: f64, #[case] yv: f64, #[case] expected: f64) {
        let x = instant_series("x", &[(0.0, xv, "X")]);
        let y = instant_series("y", &[(0.0, yv, "Y")]);
        let result = quadrants(&x, &y, &Parameters::new()).unwrap();
        assert_eq!(codes(&result), vec![expected]);
    }

    #[test]
    fn test_custom_origin() {
        let x = instant_series("x", &[(0.0, 5.0, "A"), (1.0, 15.0, "B")]);
        let y = instant_series("y", &[(0.0, 5.0, "C"), (1.0, 15.0, "D")]);
        let params = Parameters::new().with("originX", "10").with("originY", "10");
        assert_eq!(codes(&quadrants(&x, &y, &params).unwrap()), vec![3.0, 1.0]);
    }

    #[test]
    fn test_unmatched_positions_are_skipped() {
        let x = instant_series("x", &[(0.0, 1.0, "A"), (1.0, 1.0, "B"), (3.0, 1.0, "C"), (7.0, 1.0, "D")]);
        let y = instant_series("y", &[(0.0, -1.0, "E"), (2.0, 1.0, "F"), (3.0, 1.0, "G")]);
        let result = quadrants(&x, &y, &Parameters::new()).unwrap();

        let firsts: Vec<&str> = result.provenance.iter().map(|p| p[0].as_str()).collect();
        assert_eq!(firsts, vec!["A", "C"]);
        assert_eq!(codes(&result), vec![4.0, 1.0]);
        assert!(result.len() <= x.len().min(y.len()));
    }

    #[test]
    fn test_interval_match_requires_same_end() {
        let x = Series::with_samples(
            SeriesKind::Interval,
            "x",
            vec![
                Sample::new(Position::Interval { start: 0.0, end: 1.0 }, 1.0, "A"),
                Sample::new(Position::Interval { start: 2.0, end: 3.0 }, 1.0, "B"),
            ],
        );
        let y = Series::with_samples(
            SeriesKind::Interval,
            "y",
            vec![
                Sample::new(Position::Interval { start: 0.0, end: 2.0 }, 1.0, "C"),
                Sample::new(Position::Interval { start: 2.0, end: 3.0 }, -1.0, "D"),
            ],
        );
        let result = quadrants(&x, &y, &Parameters::new()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.output_series.kind, SeriesKind::Interval);
        assert_eq!(result.output_series.samples[0].position, Position::Interval { start: 2.0, end: 3.0 });
        assert_eq!(codes(&result), vec![4.0]);
    }

    #[test]
    fn test_output_tracks_first_series_metadata() {
        let mut x = instant_series("x", &[(0.0, 1.0, "A")]);
        x.extra.push(("unit".into(), "uV".into()));
        let mut y = instant_series("y", &[(0.0, 1.0, "B")]);
        y.extra.push(("unit".into(), "mV".into()));
        let result = quadrants(&x, &y, &Parameters::new()).unwrap();
        assert_eq!(result.output_series.label, "x");
        assert_eq!(
            result.output_series.extra,
            vec![("unit".to_string(), "uV".to_string()), ("transformationName".to_string(), "quadrants".to_string())]
        );
    }

    #[test]
    fn test_mismatched_kinds_are_rejected() {
        let x = instant_series("x", &[(0.0, 1.0, "A")]);
        let y = Series::with_samples(
            SeriesKind::Interval,
            "y",
            vec![Sample::new(Position::Interval { start: 0.0, end: 1.0 }, 1.0, "B")],
        );
        assert!(quadrants(&x, &y, &Parameters::new()).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_unsorted_input_is_rejected() {
        let x = instant_series("x", &[(0.0, 1.0, "A")]);
        let y = instant_series("y", &[(3.0, 1.0, "B"), (1.0, 1.0, "C")]);
        assert!(quadrants(&x, &y, &Parameters::new()).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_bad_origin_is_rejected() {
        let x = instant_series("x", &[(0.0, 1.0, "A")]);
        let y = instant_series("y", &[(0.0, 1.0, "B")]);
        let params = Parameters::new().with("originX", "centre");
        assert!(quadrants(&x, &y, &params).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_non_numeric_value_in_match_is_data_error() {
        let x = instant_series("x", &[(0.0, 1.0, "A")]);
        let y = Series::with_samples(SeriesKind::Instant, "y", vec![Sample::new(Position::Instant(0.0), "high", "B")]);
        match quadrants(&x, &y, &Parameters::new()).unwrap_err() {
            TransformationError::DataError { source_id, value } => {
                assert_eq!(source_id.as_str(), "B");
                assert_eq!(value, "high");
            }
            other => panic!("Wrong error type: {:?}", other),
        }
    }
}

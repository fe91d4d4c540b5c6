//! Parameter lookup and parsing for transformation requests.
use super::error::TransformationError;
use serde::{Deserialize, Serialize};

/// The ordered string key/value pairs supplied with a request.
///
/// When a key occurs more than once, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(pub Vec<(String, String)>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mostly for tests and call sites assembling requests by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// A finite number, or `None` when the key is absent.
    pub fn number(&self, key: &str) -> Result<Option<f64>, TransformationError> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(TransformationError::invalid(format!(
                    "parameter '{}' must be numeric, got '{}'",
                    key, raw
                ))),
            },
        }
    }

    pub fn number_or(&self, key: &str, default: f64) -> Result<f64, TransformationError> {
        Ok(self.number(key)?.unwrap_or(default))
    }

    /// A strictly positive number, or `None` when the key is absent.
    pub fn positive_number(&self, key: &str) -> Result<Option<f64>, TransformationError> {
        match self.number(key)? {
            Some(v) if v <= 0.0 => Err(TransformationError::invalid(format!(
                "parameter '{}' must be positive, got {}",
                key, v
            ))),
            other => Ok(other),
        }
    }

    /// A required, strictly positive integer. Integral floats such as `"5.0"` are accepted.
    pub fn require_positive_integer(&self, key: &str) -> Result<u64, TransformationError> {
        let value = self
            .positive_number(key)?
            .ok_or_else(|| TransformationError::invalid(format!("missing required parameter '{}'", key)))?;
        if value.fract() != 0.0 || value >= u64::MAX as f64 {
            return Err(TransformationError::invalid(format!(
                "parameter '{}' must be a positive integer, got {}",
                key, value
            )));
        }
        Ok(value as u64)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_first_occurrence_wins() {
        let params = Parameters::new().with("period", "5").with("period", "7");
        assert_eq!(params.get("period"), Some("5"));
        assert_eq!(params.get("start"), None);
    }

    #[rstest]
    #[case("5", 5)]
    #[case(" 12 ", 12)]
    #[case("3.0", 3)]
    fn test_positive_integer_accepted(#[case] raw: &str, #[case] expected: u64) {
        let params = Parameters::new().with("period", raw);
        assert_eq!(params.require_positive_integer("period").unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("0")]
    #[case("-5")]
    #[case("2.5")]
    #[case("inf")]
    #[case("18446744073709551616")] // 2^64, one past u64::MAX
    #[case("")]
    fn test_positive_integer_rejected(#[case] raw: &str) {
        let params = Parameters::new().with("period", raw);
        assert!(params.require_positive_integer("period").unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = Parameters::new().require_positive_integer("period").unwrap_err();
        assert!(err.to_string().contains("missing required parameter 'period'"));
    }

    #[test]
    fn test_number_or_default() {
        let params: Parameters = vec![("originX", "-1.5")].into_iter().collect();
        assert_eq!(params.number_or("originX", 0.0).unwrap(), -1.5);
        assert_eq!(params.number_or("originY", 0.0).unwrap(), 0.0);
        let bad = Parameters::new().with("originY", "up");
        assert!(bad.number_or("originY", 0.0).is_err());
    }
}

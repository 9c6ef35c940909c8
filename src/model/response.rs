use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Body returned by the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// `1` for the positive class, anything else is negative.
    ///
    /// Kept as a raw JSON value: numpy-backed services send `1.0` as readily
    /// as `1`, and a missing or non-numeric value reads as negative.
    #[serde(default)]
    pub prediction: Value,
    /// One row of class probabilities: `[[negative, positive]]`.
    pub probability: Vec<Vec<f64>>,
}

/// The predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Positive,
    Negative,
}

impl Classification {
    /// Maps the backend's class code: numerically `1` is positive, everything
    /// else (other numbers, strings, booleans, null) is negative.
    pub fn from_prediction(code: &Value) -> Self {
        if code.as_f64() == Some(1.0) {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors interpreting a well-formed JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("response has no probability row")]
    MissingProbabilityRow,
    #[error("probability row has {0} entries, expected 2")]
    IncompleteProbabilityRow(usize),
}

/// Display-ready prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub prediction: Classification,
    /// Positive-class probability with two decimals.
    pub positive_probability: String,
    /// Negative-class probability with two decimals.
    pub negative_probability: String,
}

impl PredictionResponse {
    /// Maps the raw response into a [`PredictionResult`].
    ///
    /// Only the first probability row is read; entries past the second are
    /// ignored.
    pub fn interpret(&self) -> Result<PredictionResult, DecodeError> {
        let row = self
            .probability
            .first()
            .ok_or(DecodeError::MissingProbabilityRow)?;
        let [negative, positive, ..] = row.as_slice() else {
            return Err(DecodeError::IncompleteProbabilityRow(row.len()));
        };
        Ok(PredictionResult {
            prediction: Classification::from_prediction(&self.prediction),
            positive_probability: format_probability(*positive),
            negative_probability: format_probability(*negative),
        })
    }
}

/// Formats a probability with exactly two decimals.
///
/// Exact ties round away from zero, so `0.125` shows as `0.13` the way a
/// browser's `toFixed(2)` does. `{:.2}` alone would round those half to even.
pub fn format_probability(p: f64) -> String {
    if is_hundredths_tie(p) {
        let cents = (p * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }
    format!("{p:.2}")
}

/// `true` if `p` lies exactly halfway between two multiples of `0.01`.
///
/// Such a value is `k / 200` with `k` odd; to be representable in binary it
/// must reduce to an odd multiple of `1/8`.
fn is_hundredths_tie(p: f64) -> bool {
    let eighths = p * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

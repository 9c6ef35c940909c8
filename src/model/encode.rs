//! Mapping from raw form values to the backend's numeric feature vector.

use serde::{Deserialize, Serialize};

use super::field::FieldName;
use super::form_input::FormInput;

/// A category token and the integer the backend expects for it.
pub type CategoryTable = &'static [(&'static str, u8)];

/// `small→1, medium→2, large→3`.
pub static TUMOR_SIZE: CategoryTable = &[("small", 1), ("medium", 2), ("large", 3)];

/// `none→0, low→1, moderate→2, high→3`.
pub static INVASIVE_NODES: CategoryTable = &[("none", 0), ("low", 1), ("moderate", 2), ("high", 3)];

/// `left→0, right→1`.
pub static BREAST: CategoryTable = &[("left", 0), ("right", 1)];

/// `no→0, yes→1`. Used by `history` and `menopause`.
pub static YES_NO: CategoryTable = &[("no", 0), ("yes", 1)];

/// JSON body posted to the prediction endpoint.
///
/// Identifying fields are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// Passed through as entered.
    pub age: String,
    pub tumor_size: u8,
    pub invasive_nodes: u8,
    pub breast: u8,
    /// Passed through as entered (`upper_inner`, ..., or empty).
    pub quadrant: String,
    pub history: u8,
    pub menopause: u8,
}

/// Code used for a value that matches no entry of `table`.
///
/// Unmatched and unset values fall through to the last, highest-severity
/// category. This means an untouched tumor size or invasive nodes dropdown is
/// submitted as `large` / `high` rather than rejected, which the backend cannot
/// distinguish from a real answer.
pub fn fallback_category(table: CategoryTable) -> u8 {
    table.last().map_or(0, |&(_, code)| code)
}

/// Looks `value` up in `table`, applying [`fallback_category`] on a miss.
///
/// Matching is exact and case-sensitive.
pub fn encode_category(value: &str, table: CategoryTable) -> u8 {
    table
        .iter()
        .find(|&&(token, _)| token == value)
        .map_or_else(|| fallback_category(table), |&(_, code)| code)
}

/// Builds the request body from raw form values. Never fails.
pub fn encode(input: &FormInput) -> PredictionRequest {
    PredictionRequest {
        age: input.get(FieldName::Age).to_string(),
        tumor_size: encode_category(input.get(FieldName::TumorSize), TUMOR_SIZE),
        invasive_nodes: encode_category(input.get(FieldName::InvasiveNodes), INVASIVE_NODES),
        breast: encode_category(input.get(FieldName::Breast), BREAST),
        quadrant: input.get(FieldName::Quadrant).to_string(),
        history: encode_category(input.get(FieldName::History), YES_NO),
        menopause: encode_category(input.get(FieldName::Menopause), YES_NO),
    }
}

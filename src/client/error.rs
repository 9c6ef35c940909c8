use reqwest::StatusCode;

use crate::model::DecodeError;

/// Errors that can occur while submitting a prediction request.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("prediction endpoint returned {0}")]
    Status(StatusCode),

    /// The response body was not the expected JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well-formed but lacked a usable probability pair.
    #[error("malformed prediction: {0}")]
    Decode(#[from] DecodeError),
}

//! Prediction endpoint client and submission ordering.
//!
//! One POST per submit, no retries. Outcomes are tagged with a
//! [`Generation`] so that a slow earlier request cannot overwrite the result
//! of a later one.

mod error;
mod http;
mod tracker;

pub use error::SubmissionError;
pub use http::{PredictionClient, PredictionService, decode_body};
pub use tracker::{Generation, SubmissionTracker};

//! Actions returned by screen event handlers.

use crate::model::PredictionRequest;

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Post the encoded form to the prediction endpoint.
    Submit(PredictionRequest),
    /// Quit the application.
    Quit,
}

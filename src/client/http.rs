use reqwest::Client;

use super::error::SubmissionError;
use crate::model::{PredictionRequest, PredictionResponse, PredictionResult};

/// Anything that can turn a [`PredictionRequest`] into a [`PredictionResult`].
pub trait PredictionService: Send + Sync + 'static {
    /// Performs one best-effort submission. No retries.
    fn submit(
        &self,
        request: PredictionRequest,
    ) -> impl Future<Output = Result<PredictionResult, SubmissionError>> + Send;
}

/// JSON-over-HTTP client for the prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    endpoint: String,
}

impl PredictionClient {
    /// Creates a client that posts to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a client that posts to `endpoint` through a preconfigured
    /// [`reqwest::Client`] (proxy, TLS or connection settings).
    pub fn with_http(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionService for PredictionClient {
    async fn submit(&self, request: PredictionRequest) -> Result<PredictionResult, SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, ?request, "posting prediction request");
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status));
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}

/// Parses a response body and maps it for display.
pub fn decode_body(body: &[u8]) -> Result<PredictionResult, SubmissionError> {
    let response: PredictionResponse = serde_json::from_slice(body)?;
    Ok(response.interpret()?)
}

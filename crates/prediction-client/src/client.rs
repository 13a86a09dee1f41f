//! Prediction client implementation

use crate::wire::{PredictRequest, PredictResponse, PredictionPayload};
use prediction_fallback::{FallbackEngine, TransactionInput};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    BuildFailed(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}

/// Prediction client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Client for the remote prediction service.
///
/// Remote failures never surface to the caller: any connect error,
/// timeout, non-2xx status, or unparseable body engages the offline
/// fallback engine, whose result is returned in the same wire shape.
pub struct PredictionClient {
    config: ClientConfig,
    http: reqwest::Client,
    fallback: FallbackEngine,
}

impl PredictionClient {
    /// Create a new client with the given config
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        info!("Creating prediction client for {}", config.base_url);
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::BuildFailed(e.to_string()))?;

        Ok(Self {
            config,
            http,
            fallback: FallbackEngine::new(),
        })
    }

    /// Predict category and fraud risk for a transaction.
    ///
    /// Always returns a response; the `model_version` field distinguishes
    /// remote results from offline fallbacks.
    pub async fn predict(&self, text: &str, amount: f64) -> PredictResponse {
        match self.try_remote(text, amount).await {
            Ok(response) => {
                debug!("remote prediction succeeded");
                response
            }
            Err(err) => {
                warn!("remote prediction failed, using offline fallback: {err}");
                self.predict_offline(text, amount)
            }
        }
    }

    /// Attempt the remote call without engaging the fallback
    pub async fn try_remote(&self, text: &str, amount: f64) -> Result<PredictResponse, ClientError> {
        let url = format!("{}/api/v1/predict", self.config.base_url);
        let body = PredictRequest {
            text: text.to_string(),
            amount,
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<PredictResponse>()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    /// Compute a prediction locally in the remote wire shape
    fn predict_offline(&self, text: &str, amount: f64) -> PredictResponse {
        let input = TransactionInput::new(text, amount);
        let prediction = self.fallback.predict(&input);

        PredictResponse {
            success: true,
            prediction: PredictionPayload::from_offline(&prediction, amount),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

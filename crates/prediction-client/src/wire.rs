//! Wire types for the prediction service contract

use prediction_fallback::{format_rupees, Prediction, RiskLevel};
use serde::{Deserialize, Serialize};

/// Request body for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Free-text transaction description
    pub text: String,
    /// Transaction amount in rupees
    pub amount: f64,
}

/// Prediction payload as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub category: String,
    pub category_confidence: f64,
    pub fraud_probability: f64,
    pub is_fraud: bool,
    pub fraud_risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_formatted: Option<String>,
    pub model_version: String,
}

/// Top-level predict response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: PredictionPayload,
}

impl PredictionPayload {
    /// Render an offline engine result into the remote wire shape
    pub fn from_offline(prediction: &Prediction, amount: f64) -> Self {
        Self {
            category: prediction.category.to_string(),
            category_confidence: prediction.category_confidence,
            fraud_probability: prediction.fraud_probability,
            is_fraud: prediction.is_fraud,
            fraud_risk_level: prediction.risk_level,
            risk_factors: prediction.risk_factors.clone(),
            amount_formatted: Some(format_rupees(amount)),
            model_version: prediction.source.to_string(),
        }
    }
}

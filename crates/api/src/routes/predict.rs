//! Predict Route

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;
use prediction_client::{PredictResponse, PredictionPayload};
use prediction_fallback::{format_rupees, TransactionInput};

/// Identity of the server-side rule set
const MODEL_VERSION: &str = "rules_v1";

/// Request body for the predict endpoint.
///
/// Missing fields are coerced at the edge: absent text becomes an empty
/// description, absent amount becomes zero.
#[derive(Debug, Deserialize)]
pub struct PredictBody {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub amount: f64,
}

/// Predict category and fraud risk for a transaction
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PredictBody>,
) -> Json<PredictResponse> {
    let input = TransactionInput::new(body.text, body.amount);
    let prediction = state.engine.predict(&input);

    debug!(
        category = prediction.category.as_str(),
        probability = prediction.fraud_probability,
        "served prediction"
    );

    let payload = PredictionPayload {
        category: prediction.category.to_string(),
        category_confidence: prediction.category_confidence,
        fraud_probability: prediction.fraud_probability,
        is_fraud: prediction.is_fraud,
        fraud_risk_level: prediction.risk_level,
        risk_factors: prediction.risk_factors,
        amount_formatted: Some(format_rupees(input.amount)),
        model_version: MODEL_VERSION.to_string(),
    };

    Json(PredictResponse {
        success: true,
        prediction: payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_predict_handler_categorizes() {
        let state = Arc::new(AppState::new());
        let body = PredictBody {
            text: "Starbucks Coffee Day".to_string(),
            amount: 450.0,
        };

        let Json(response) = predict_handler(State(state), Json(body)).await;

        assert!(response.success);
        assert_eq!(response.prediction.category, "Dining");
        assert_eq!(response.prediction.model_version, "rules_v1");
        assert_eq!(response.prediction.amount_formatted.as_deref(), Some("₹450"));
    }

    #[tokio::test]
    async fn test_predict_handler_coerces_missing_fields() {
        let state = Arc::new(AppState::new());
        let body: PredictBody = serde_json::from_str("{}").unwrap();

        let Json(response) = predict_handler(State(state), Json(body)).await;

        assert_eq!(response.prediction.category, "Other");
        // Empty description is vague but low risk
        assert_eq!(response.prediction.fraud_probability, 0.2);
        assert!(!response.prediction.is_fraud);
    }
}

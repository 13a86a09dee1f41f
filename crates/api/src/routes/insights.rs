//! Insights Route

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;
use prediction_fallback::TransactionInput;

/// A single transaction in an insights request
#[derive(Debug, Deserialize)]
pub struct TransactionBody {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub amount: f64,
}

/// Request body for the insights endpoint
#[derive(Debug, Deserialize)]
pub struct InsightsBody {
    #[serde(default)]
    pub transactions: Vec<TransactionBody>,
}

/// Aggregated spending insights over a batch of transactions
#[derive(Debug, Serialize)]
pub struct Insights {
    pub total_amount: f64,
    pub category_breakdown: BTreeMap<String, f64>,
    pub average_transaction: f64,
    pub total_transactions: usize,
    pub fraud_transactions: usize,
    pub fraud_percentage: f64,
}

/// Response for the insights endpoint
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'static str>,
}

/// Aggregate rule-engine predictions over a batch of transactions
pub async fn insights_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InsightsBody>,
) -> Json<InsightsResponse> {
    if body.transactions.is_empty() {
        return Json(InsightsResponse {
            success: false,
            error: Some("No transactions provided".to_string()),
            insights: None,
            currency: None,
        });
    }

    let count = body.transactions.len();
    let mut total_amount = 0.0;
    let mut category_breakdown: BTreeMap<String, f64> = BTreeMap::new();
    let mut fraud_count = 0;

    for t in &body.transactions {
        let input = TransactionInput::new(t.text.clone(), t.amount);
        let prediction = state.engine.predict(&input);

        total_amount += t.amount;
        *category_breakdown
            .entry(prediction.category.to_string())
            .or_insert(0.0) += t.amount;
        if prediction.is_fraud {
            fraud_count += 1;
        }
    }

    debug!(transactions = count, fraud = fraud_count, "served insights");

    Json(InsightsResponse {
        success: true,
        error: None,
        insights: Some(Insights {
            total_amount,
            category_breakdown,
            average_transaction: total_amount / count as f64,
            total_transactions: count,
            fraud_transactions: fraud_count,
            fraud_percentage: (fraud_count as f64 / count as f64) * 100.0,
        }),
        currency: Some("INR"),
    })
}

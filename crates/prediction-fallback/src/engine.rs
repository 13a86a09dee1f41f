//! Fallback orchestrator

use crate::category::categorize;
use crate::result::{Prediction, TransactionInput};
use crate::risk::score;
use tracing::debug;

/// Placeholder confidence attached to offline category predictions
pub const OFFLINE_CONFIDENCE: f64 = 0.85;

/// Source tag marking a prediction as locally computed
pub const OFFLINE_SOURCE: &str = "offline_fallback";

/// Orchestrates the category classifier and fraud scorer into a single
/// prediction when the remote service is unavailable.
///
/// Stateless and infallible: every call is a pure function of its input
/// and always yields a valid `Prediction`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEngine;

impl FallbackEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Produce an offline prediction for a transaction
    pub fn predict(&self, input: &TransactionInput) -> Prediction {
        let category = categorize(&input.description);
        let assessment = score(&input.description, input.amount);

        debug!(
            category = category.as_str(),
            probability = assessment.probability,
            "offline prediction computed"
        );

        Prediction {
            category,
            category_confidence: OFFLINE_CONFIDENCE,
            fraud_probability: assessment.probability,
            is_fraud: assessment.is_fraud,
            risk_level: assessment.risk_level,
            risk_factors: assessment.risk_factors,
            source: OFFLINE_SOURCE,
        }
    }
}

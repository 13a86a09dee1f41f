//! Prediction result types

use serde::{Deserialize, Serialize};

/// Transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    Dining,
    Shopping,
    Transportation,
    Entertainment,
    Banking,
    Groceries,
    Utilities,
    Healthcare,
    Education,
    /// Fallback when no rule matches
    #[default]
    Other,
}

impl Category {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dining => "Dining",
            Category::Shopping => "Shopping",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Banking => "Banking",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fraud risk level derived from a fraud probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Derive the risk level from a fraud probability in [0, 1].
    ///
    /// Boundaries are strict: a probability of exactly 0.4 is still Low.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.8 {
            RiskLevel::Critical
        } else if probability > 0.6 {
            RiskLevel::High
        } else if probability > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the prediction engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Free-text description (may be empty)
    pub description: String,
    /// Transaction amount in currency units (non-negative)
    pub amount: f64,
}

impl TransactionInput {
    /// Create a new input
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Complete prediction produced by the offline engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Inferred transaction category
    pub category: Category,
    /// Confidence attached to the category (fixed placeholder in offline mode)
    pub category_confidence: f64,
    /// Fraud probability in [0, 1]
    pub fraud_probability: f64,
    /// Whether the transaction is flagged as fraud (probability > 0.5)
    pub is_fraud: bool,
    /// Discrete risk level derived from the probability
    pub risk_level: RiskLevel,
    /// Human-readable factors that raised (or cleared) the score; never empty
    pub risk_factors: Vec<String>,
    /// Origin of the prediction
    pub source: &'static str,
}

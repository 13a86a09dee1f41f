//! Additive fraud-risk scoring

use crate::result::RiskLevel;

/// Keywords that immediately raise the fraud score
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "unknown",
    "suspicious",
    "fake",
    "fraud",
    "scam",
    "unauthorized",
];

/// Descriptions shorter than this many whitespace tokens are considered vague
const VAGUE_TOKEN_THRESHOLD: usize = 3;

/// Outcome of fraud scoring for a single transaction
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Fraud probability, clamped to [0, 1]
    pub probability: f64,
    /// Whether the transaction is flagged as fraud (probability > 0.5)
    pub is_fraud: bool,
    /// Risk level derived from the probability
    pub risk_level: RiskLevel,
    /// Triggered factors, in fixed order; never empty
    pub risk_factors: Vec<String>,
}

/// Score a transaction for fraud risk.
///
/// Contributions are strictly additive and then clamped:
/// - amount tier (highest applicable only, strict `>` boundaries):
///   >100k adds 0.4, >50k adds 0.2, >25k adds 0.1
/// - any suspicious keyword adds 0.5, applied once
/// - fewer than 3 whitespace tokens adds 0.2
///
/// The fraud flag uses its own 0.5 threshold, independent of the
/// level boundaries.
pub fn score(description: &str, amount: f64) -> RiskAssessment {
    let text = description.to_lowercase();
    let mut probability: f64 = 0.0;

    if amount > 100_000.0 {
        probability += 0.4;
    } else if amount > 50_000.0 {
        probability += 0.2;
    } else if amount > 25_000.0 {
        probability += 0.1;
    }

    let has_suspicious = SUSPICIOUS_KEYWORDS.iter().any(|k| text.contains(k));
    if has_suspicious {
        probability += 0.5;
    }

    let is_vague = description.split_whitespace().count() < VAGUE_TOKEN_THRESHOLD;
    if is_vague {
        probability += 0.2;
    }

    let probability = probability.min(1.0);

    let mut risk_factors = Vec::new();
    if amount > 50_000.0 {
        risk_factors.push("High amount".to_string());
    }
    if has_suspicious {
        risk_factors.push("Suspicious keywords".to_string());
    }
    if is_vague {
        risk_factors.push("Vague description".to_string());
    }
    if risk_factors.is_empty() {
        risk_factors.push("Normal transaction".to_string());
    }

    RiskAssessment {
        probability,
        is_fraud: probability > 0.5,
        risk_level: RiskLevel::from_probability(probability),
        risk_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_tiers_are_strict() {
        assert_eq!(score("regular grocery shopping run", 25_000.0).probability, 0.0);
        assert_eq!(score("regular grocery shopping run", 25_001.0).probability, 0.1);
        assert_eq!(score("regular grocery shopping run", 50_000.0).probability, 0.1);
        assert_eq!(score("regular grocery shopping run", 100_000.0).probability, 0.2);
        assert_eq!(score("regular grocery shopping run", 100_001.0).probability, 0.4);
    }

    #[test]
    fn test_keyword_contribution_applied_once() {
        // Four tokens, moderate amount: only the keyword term fires
        let a = score("suspicious transfer to account", 0.0);
        let b = score("suspicious fake scam transfer unauthorized", 0.0);
        assert_eq!(a.probability, 0.5);
        assert_eq!(b.probability, 0.5);
    }

    #[test]
    fn test_fraud_flag_boundary() {
        // Exactly 0.5 is not fraud
        let r = score("suspicious transfer to account", 0.0);
        assert_eq!(r.probability, 0.5);
        assert!(!r.is_fraud);
        assert_eq!(r.risk_level, RiskLevel::Medium);

        // 0.6 crosses the fraud threshold while still MEDIUM-adjacent
        let r = score("suspicious transfer to account", 30_000.0);
        assert_eq!(r.probability, 0.6);
        assert!(r.is_fraud);
    }

    #[test]
    fn test_probability_clamped() {
        // 0.4 + 0.5 + 0.2 would be 1.1 without the clamp
        let r = score("fraud", 10_000_000.0);
        assert_eq!(r.probability, 1.0);
        assert_eq!(r.risk_level, RiskLevel::Critical);
        assert!(r.is_fraud);
    }

    #[test]
    fn test_factor_order_and_sentinel() {
        let r = score("unknown transfer", 60_000.0);
        assert_eq!(
            r.risk_factors,
            vec!["High amount", "Suspicious keywords", "Vague description"]
        );

        let r = score("Starbucks Coffee Day", 450.0);
        assert_eq!(r.risk_factors, vec!["Normal transaction"]);
        assert_eq!(r.probability, 0.0);
        assert_eq!(r.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_high_amount_factor_independent_of_tier() {
        // 155k: tier contributes 0.4 but the factor threshold is 50k
        let r = score("HDFC Bank EMI payment", 155_000.0);
        assert_eq!(r.probability, 0.4);
        assert_eq!(r.risk_level, RiskLevel::Low);
        assert!(!r.is_fraud);
        assert_eq!(r.risk_factors, vec!["High amount"]);
    }

    #[test]
    fn test_vague_single_token() {
        let r = score("X", 0.0);
        assert_eq!(r.probability, 0.2);
        assert_eq!(r.risk_level, RiskLevel::Low);
        assert_eq!(r.risk_factors, vec!["Vague description"]);
    }

    #[test]
    fn test_empty_description_is_vague() {
        let r = score("", 0.0);
        assert_eq!(r.probability, 0.2);
        assert_eq!(r.risk_factors, vec!["Vague description"]);
    }
}

//! Offline Prediction Fallback Engine
//!
//! Rule-based categorization and fraud scoring used when the remote
//! prediction service is unreachable.

mod category;
mod currency;
mod engine;
mod result;
mod risk;

pub use category::categorize;
pub use currency::format_rupees;
pub use engine::{FallbackEngine, OFFLINE_CONFIDENCE, OFFLINE_SOURCE};
pub use result::{Category, Prediction, RiskLevel, TransactionInput};
pub use risk::{score, RiskAssessment};

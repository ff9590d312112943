//! Input classifier
//!
//! Maps free-text input to a topic via case-insensitive substring matching
//! against an ordered rule list. First match wins; inputs matching no rule
//! fall through to [`Topic::GeneralAnalysis`].
//!
//! Substring matching (not tokenization) and the fixed rule order are a
//! deliberate simplicity/precision tradeoff: the same input must always
//! resolve to the same topic. Any accuracy improvement here is a separately
//! versioned behavior change, not a cleanup.

use serde::{Deserialize, Serialize};

/// Fixed category label used to select a canned response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    RiskManagement,
    CandlestickPatterns,
    /// Default topic for inputs matching no registered keyword.
    GeneralAnalysis,
}

/// Ordered rule list. Earlier rules shadow later ones when keywords overlap.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::RiskManagement, &["risk", "money management"]),
    (Topic::CandlestickPatterns, &["candlestick", "pattern"]),
];

/// Classify raw input text to a topic.
///
/// Pure and total: never fails, never mutates.
pub fn classify(input: &str) -> Topic {
    let lowered = input.to_lowercase();
    for (topic, keywords) in RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *topic;
        }
    }
    Topic::GeneralAnalysis
}

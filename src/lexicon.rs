//! Keyword and domain lists driving the feature extractor
//!
//! The lists are configuration, not logic: the extractor and scorer depend
//! on whatever `Lexicon` they are handed, so deployments can swap or extend
//! the phrases without touching scoring code.

use serde::{Deserialize, Serialize};

/// Phrases associated with credential-phishing lures
const SUSPICIOUS_PHRASES: [&str; 20] = [
    "verify your account",
    "update your password",
    "urgent action required",
    "suspended",
    "click here",
    "login now",
    "bank account",
    "invoice attached",
    "verify identity",
    "account locked",
    "security alert",
    "confirm your identity",
    "act now",
    "limited time",
    "expires soon",
    "click below",
    "verify now",
    "unusual activity",
    "verify payment",
    "update payment",
];

/// Phrases typical of routine transactional mail
const TRUST_PHRASES: [&str; 10] = [
    "newsletter",
    "receipt",
    "schedule",
    "meeting",
    "thank you",
    "invoice number",
    "order confirmation",
    "shipping",
    "tracking",
    "delivery",
];

/// Low-trust top-level-domain suffixes.
///
/// Matched as substrings of the whole URL, not anchored to the TLD
/// position. Intentionally permissive.
const SUSPICIOUS_TLDS: [&str; 9] = [
    ".tk",
    ".ml",
    ".ga",
    ".cf",
    ".gq",
    ".xyz",
    ".top",
    ".click",
    ".download",
];

/// Versioned, ordered keyword/domain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Revision identifier for the lists below
    pub version: String,

    /// Lower-case phrases counted as phishing signals
    pub suspicious_phrases: Vec<String>,

    /// Lower-case phrases counted as legitimacy signals
    pub trust_phrases: Vec<String>,

    /// TLD suffixes marking a URL or sender domain as suspicious
    pub suspicious_tlds: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            version: "2024.1".to_string(),
            suspicious_phrases: SUSPICIOUS_PHRASES.iter().map(ToString::to_string).collect(),
            trust_phrases: TRUST_PHRASES.iter().map(ToString::to_string).collect(),
            suspicious_tlds: SUSPICIOUS_TLDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Lexicon {
    /// Count how many of `phrases` occur as literal substrings of `text`.
    ///
    /// Each phrase contributes at most one hit regardless of repetition.
    #[must_use]
    pub fn count_hits(text: &str, phrases: &[String]) -> usize {
        phrases.iter().filter(|p| text.contains(p.as_str())).count()
    }

    /// Check whether a lower-cased domain or URL contains any suspicious
    /// TLD suffix
    #[must_use]
    pub fn has_suspicious_tld(&self, lower: &str) -> bool {
        self.suspicious_tlds.iter().any(|tld| lower.contains(tld.as_str()))
    }
}

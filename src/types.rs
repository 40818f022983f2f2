//! Core types for email content and analysis results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual artefacts of a single email, the input to one analysis call.
///
/// Built fresh per request and discarded once the response is produced;
/// nothing here is shared or persisted. Every field except `body` is
/// optional and defaults to absent/empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailContent {
    /// Subject line, if one was provided or parsed
    pub subject: Option<String>,

    /// Message body, plain text or HTML (possibly empty, never absent)
    pub body: String,

    /// Flattened header dump, `"Key: Value"` lines joined by newlines
    pub raw_headers: Option<String>,

    /// Sender address from the From header
    pub from_address: Option<String>,

    /// Reply-To address, if present
    pub reply_to: Option<String>,

    /// All To header values
    pub to_addresses: Vec<String>,

    /// HTML body, when the message carries one
    pub html_body: Option<String>,
}

/// Numeric and boolean signals derived from one email.
///
/// Computed once per analysis and immutable afterward. Ratio fields are
/// always within [0,1]; counts are non-negative by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailFeatures {
    /// Suspicious phrases found in the normalized body + subject
    pub suspicious_keyword_count: usize,

    /// Trust phrases found in the normalized body + subject
    pub trust_keyword_count: usize,

    /// HTTP(S) URLs in the original body (duplicates count separately)
    pub url_count: usize,

    /// URLs whose lower-cased form contains a low-trust TLD suffix
    pub suspicious_domain_count: usize,

    /// Exclamation marks in the original body and subject
    pub exclamation_count: usize,

    /// Question marks in the original body and subject
    pub question_count: usize,

    /// Fraction of upper-case letters in the first 1000 body characters
    pub uppercase_ratio: f64,

    /// Body length in characters
    pub body_length: usize,

    /// Subject length in characters
    pub subject_length: usize,

    /// Message carries an HTML body or an `<html` marker
    pub has_html: bool,

    /// Tag-shaped substrings per body character
    pub html_ratio: f64,

    /// Some anchor's visible text names a URL its target does not match
    pub link_text_mismatch: bool,

    /// Sender domain contains a low-trust TLD suffix
    pub from_domain_suspicious: bool,

    /// Reply-To domain differs from the sender domain
    pub reply_to_different: bool,

    /// Word-boundary urgency pattern matches in body + subject
    pub urgency_words: usize,

    /// Rough misspelling estimate in [0,1]
    pub spelling_errors_estimate: f64,
}

/// Binary classification outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Phishing,
    Legitimate,
}

impl Verdict {
    /// Apply the decision boundary: scores at or above 0.5 are phishing
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Self::Phishing
        } else {
            Self::Legitimate
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phishing => write!(f, "phishing"),
            Self::Legitimate => write!(f, "legitimate"),
        }
    }
}

/// Observed value of an inspected feature, as exposed on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InsightValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl From<usize> for InsightValue {
    fn from(value: usize) -> Self {
        Self::Integer(value as u64)
    }
}

impl From<bool> for InsightValue {
    fn from(value: bool) -> Self {
        Self::Integer(u64::from(value))
    }
}

/// Feature-level explanation record surfaced to the caller.
///
/// The weight is advisory only, a display hint in [0,1] computed
/// independently of the scalar score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisInsight {
    /// Identifier from a closed set of feature names
    pub name: String,

    /// Observed value (count, or 1/0 for flags)
    pub value: InsightValue,

    /// Relative display importance in [0,1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Localized free-form explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Structured metadata extracted from the message headers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailMetadata {
    pub subject: Option<String>,
    pub from_address: Option<String>,
    pub reply_to: Option<String>,
    pub to_addresses: Vec<String>,
}

/// Complete analysis outcome for one email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Binary classification outcome
    pub verdict: Verdict,

    /// Distance from the 0.5 decision boundary, rescaled to [0,1]
    pub confidence: f64,

    /// Identifier of the scoring model that produced the verdict
    pub model_version: String,

    /// Header metadata echoed back to the caller
    pub metadata: EmailMetadata,

    /// Human-readable evidence sentences, in trigger order
    pub highlights: Vec<String>,

    /// Exactly six feature-level explanation records, in fixed order
    pub insights: Vec<AnalysisInsight>,
}

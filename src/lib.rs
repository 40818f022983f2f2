// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

//! Email Verdict
//!
//! A heuristic phishing analyzer for email content. Raw text or RFC822
//! bytes go through normalization, feature extraction, and fixed-weight
//! scoring, producing a binary verdict with a confidence score and
//! human-readable evidence.
//!
//! # Features
//!
//! - Plain-text and raw RFC822/MIME input paths
//! - Keyword, URL, and low-trust-domain signals
//! - Header-level checks (sender domain, Reply-To divergence)
//! - Explainable output: highlights plus per-feature insights
//! - Swappable keyword lexicon, weights, and highlight locale
//!
//! # Example
//!
//! ```rust
//! use email_verdict::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze_text(
//!     "Please verify your account now: http://login-update.tk/verify",
//!     Some("Security alert"),
//!     None,
//! );
//!
//! println!("{} ({:.2})", report.verdict, report.confidence);
//! assert_eq!(report.insights.len(), 6);
//! ```

mod decoder;
mod error;
mod features;
mod lexicon;
mod scoring;
mod types;

pub use decoder::decode_message;
pub use error::{AnalyzeError, Result};
pub use features::normalize;
pub use lexicon::Lexicon;
pub use scoring::{HighlightCatalog, HighlightKind, ScoreResult, Weights, score_features};
pub use types::*;

use tracing::debug;

/// Default model identifier reported in every response
pub const MODEL_VERSION: &str = "0.1.0-ml";

/// Immutable analysis configuration plus the entry points.
///
/// Holds the model version, keyword lexicon, scoring weights, and highlight
/// catalog. Construct once and share by reference; every analysis call is a
/// pure function of its input, so calls may run concurrently without
/// locking.
#[derive(Debug, Clone)]
pub struct Analyzer {
    model_version: String,
    lexicon: Lexicon,
    weights: Weights,
    catalog: HighlightCatalog,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with the default lexicon, weights, and Arabic highlights
    #[must_use]
    pub fn new() -> Self {
        Self {
            model_version: MODEL_VERSION.to_string(),
            lexicon: Lexicon::default(),
            weights: Weights::default(),
            catalog: HighlightCatalog::default(),
        }
    }

    /// Override the reported model version
    #[must_use]
    pub fn with_model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = version.into();
        self
    }

    /// Swap the keyword/domain lists
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Swap the scoring weight table
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Swap the highlight locale
    #[must_use]
    pub fn with_catalog(mut self, catalog: HighlightCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The weight table this analyzer scores with
    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    /// The keyword/domain lists this analyzer matches against
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze an email supplied as plain text.
    ///
    /// The caller is expected to reject empty bodies before calling. When
    /// the body carries an `<html` or `<body` marker it is also treated as
    /// the HTML body.
    #[must_use]
    pub fn analyze_text(
        &self,
        body: &str,
        subject: Option<&str>,
        headers: Option<&str>,
    ) -> AnalysisResponse {
        let lower = body.to_lowercase();
        let html_body = (lower.contains("<html") || lower.contains("<body"))
            .then(|| body.to_string());

        let content = EmailContent {
            subject: subject.map(ToString::to_string),
            body: body.to_string(),
            raw_headers: headers.map(ToString::to_string),
            html_body,
            ..EmailContent::default()
        };
        self.run(content)
    }

    /// Analyze a raw RFC822 message.
    ///
    /// Fails only when the bytes cannot be parsed as a message structure
    /// at all; partially malformed messages are analyzed best-effort. The
    /// caller enforces size limits and non-emptiness.
    pub fn analyze_message(&self, raw: &[u8]) -> Result<AnalysisResponse> {
        let content = decode_message(raw)?;
        Ok(self.run(content))
    }

    fn run(&self, content: EmailContent) -> AnalysisResponse {
        let normalized_body = normalize(&content.body);
        let normalized_subject = normalize(content.subject.as_deref().unwrap_or(""));

        let features = EmailFeatures::extract(
            &content,
            &self.lexicon,
            &normalized_body,
            &normalized_subject,
        );
        let result = score_features(&features, &self.weights, &self.catalog);

        let verdict = Verdict::from_score(result.score);
        debug!(
            score = result.score,
            %verdict,
            highlights = result.highlights.len(),
            "analysis complete"
        );

        AnalysisResponse {
            verdict,
            confidence: (result.score - 0.5).abs() * 2.0,
            model_version: self.model_version.clone(),
            metadata: EmailMetadata {
                subject: content.subject,
                from_address: content.from_address,
                reply_to: content.reply_to,
                to_addresses: content.to_addresses,
            },
            highlights: result.highlights,
            insights: result.insights,
        }
    }
}

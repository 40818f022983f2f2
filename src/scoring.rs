//! Fixed-weight scoring of extracted features
//!
//! Despite its "ML-like" heritage this is a plain linear combiner: each
//! signal is normalized to [0,1], multiplied by a fixed weight, and summed
//! onto a base prior. Weight storage sits behind [`Weights`] so a trained
//! model could later be substituted without touching feature extraction.

use crate::types::{AnalysisInsight, EmailFeatures, InsightValue};
use serde::{Deserialize, Serialize};

/// Linear weights applied to the normalized feature signals.
///
/// Positive weights push toward "phishing"; `trust_keywords` is a
/// deduction. Fixed constants per deployment, never learned at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    /// Prior bias toward "legitimate"
    pub base: f64,
    pub suspicious_keywords: f64,
    pub url_count: f64,
    pub suspicious_domains: f64,
    pub exclamation: f64,
    pub uppercase_ratio: f64,
    pub html_ratio: f64,
    pub link_mismatch: f64,
    pub suspicious_from: f64,
    pub reply_different: f64,
    pub urgency: f64,
    pub spelling: f64,
    pub trust_keywords: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            base: 0.30,
            suspicious_keywords: 0.15,
            url_count: 0.12,
            suspicious_domains: 0.20,
            exclamation: 0.05,
            uppercase_ratio: 0.08,
            html_ratio: 0.06,
            link_mismatch: 0.15,
            suspicious_from: 0.12,
            reply_different: 0.10,
            urgency: 0.10,
            spelling: 0.05,
            trust_keywords: 0.08,
        }
    }
}

/// Conditions that can surface an evidence sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    SuspiciousKeywords,
    SuspiciousDomains,
    ManyLinks,
    LinkTextMismatch,
    SenderDomainSuspicious,
    ReplyToDiffers,
    ExcessiveUrgency,
    TrustSignals,
}

/// Localized message templates for highlights and insight descriptions.
///
/// Highlight text is locale-specific while the trigger conditions are not,
/// so the catalog only maps a kind to a template with a `{count}`
/// placeholder. The default locale is Arabic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightCatalog {
    pub suspicious_keywords: String,
    pub suspicious_domains: String,
    pub many_links: String,
    pub link_text_mismatch: String,
    pub sender_domain_suspicious: String,
    pub reply_to_differs: String,
    pub excessive_urgency: String,
    pub trust_signals: String,
    pub insight_descriptions: InsightDescriptions,
}

/// Per-insight localized descriptions, in wire order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDescriptions {
    pub suspicious_keywords: String,
    pub url_count: String,
    pub suspicious_domains: String,
    pub link_mismatch: String,
    pub from_domain_suspicious: String,
    pub trust_signals: String,
}

impl Default for HighlightCatalog {
    fn default() -> Self {
        Self::arabic()
    }
}

impl HighlightCatalog {
    /// The original deployment's Arabic analyst-facing strings
    #[must_use]
    pub fn arabic() -> Self {
        Self {
            suspicious_keywords: "تم اكتشاف {count} كلمة/عبارة مشبوهة في الرسالة.".to_string(),
            suspicious_domains: "تم اكتشاف {count} رابط يحتوي على نطاق مشبوه.".to_string(),
            many_links: "الرسالة تحتوي على عدد كبير من الروابط ({count}).".to_string(),
            link_text_mismatch: "تم اكتشاف عدم تطابق بين نص الرابط والرابط الفعلي.".to_string(),
            sender_domain_suspicious: "نطاق المرسل مشبوه.".to_string(),
            reply_to_differs: "عنوان الرد يختلف عن عنوان المرسل.".to_string(),
            excessive_urgency: "الرسالة تحتوي على كلمات إلحاح مفرطة.".to_string(),
            trust_signals: "تم اكتشاف {count} إشارة ثقة قد تشير إلى رسالة شرعية.".to_string(),
            insight_descriptions: InsightDescriptions {
                suspicious_keywords: "عدد الكلمات المشبوهة المكتشفة".to_string(),
                url_count: "عدد الروابط في الرسالة".to_string(),
                suspicious_domains: "عدد الروابط بنطاقات مشبوهة".to_string(),
                link_mismatch: "عدم تطابق بين نص الرابط والرابط الفعلي".to_string(),
                from_domain_suspicious: "نطاق المرسل مشبوه".to_string(),
                trust_signals: "إشارات الثقة المكتشفة".to_string(),
            },
        }
    }

    /// Render the template for `kind`, interpolating `count` where the
    /// template carries a placeholder
    #[must_use]
    pub fn render(&self, kind: HighlightKind, count: usize) -> String {
        let template = match kind {
            HighlightKind::SuspiciousKeywords => &self.suspicious_keywords,
            HighlightKind::SuspiciousDomains => &self.suspicious_domains,
            HighlightKind::ManyLinks => &self.many_links,
            HighlightKind::LinkTextMismatch => &self.link_text_mismatch,
            HighlightKind::SenderDomainSuspicious => &self.sender_domain_suspicious,
            HighlightKind::ReplyToDiffers => &self.reply_to_differs,
            HighlightKind::ExcessiveUrgency => &self.excessive_urgency,
            HighlightKind::TrustSignals => &self.trust_signals,
        };
        template.replace("{count}", &count.to_string())
    }
}

/// Scoring outcome: scalar risk score plus the evidence that produced it
#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Risk score in [0,1]
    pub score: f64,

    /// Evidence sentences in fixed trigger order
    pub highlights: Vec<String>,

    /// Exactly six insight records in fixed name order
    pub insights: Vec<AnalysisInsight>,
}

/// Combine features into a risk score with highlights and insights.
///
/// Deterministic and total: identical features always yield an identical
/// result. Insight weights are advisory display values computed
/// independently of the score.
#[must_use]
pub fn score_features(
    features: &EmailFeatures,
    weights: &Weights,
    catalog: &HighlightCatalog,
) -> ScoreResult {
    let mut score = weights.base;

    score += saturate(features.suspicious_keyword_count as f64 / 5.0) * weights.suspicious_keywords;
    score += saturate(features.url_count as f64 / 3.0) * weights.url_count;
    score += saturate(features.suspicious_domain_count as f64 / 2.0) * weights.suspicious_domains;
    score += saturate(features.exclamation_count as f64 / 5.0) * weights.exclamation;
    score += saturate(features.uppercase_ratio * 2.0) * weights.uppercase_ratio;
    score += saturate(features.html_ratio * 10.0) * weights.html_ratio;
    if features.link_text_mismatch {
        score += weights.link_mismatch;
    }
    if features.from_domain_suspicious {
        score += weights.suspicious_from;
    }
    if features.reply_to_different {
        score += weights.reply_different;
    }
    score += saturate(features.urgency_words as f64 / 3.0) * weights.urgency;
    score += saturate(features.spelling_errors_estimate) * weights.spelling;

    score -= saturate(features.trust_keyword_count as f64 / 3.0) * weights.trust_keywords.abs();

    let score = score.clamp(0.0, 1.0);

    ScoreResult {
        score,
        highlights: build_highlights(features, catalog),
        insights: build_insights(features, &catalog.insight_descriptions),
    }
}

fn saturate(value: f64) -> f64 {
    value.min(1.0)
}

/// One sentence per triggered condition, in fixed order
fn build_highlights(features: &EmailFeatures, catalog: &HighlightCatalog) -> Vec<String> {
    let mut highlights = Vec::new();
    if features.suspicious_keyword_count > 0 {
        highlights.push(catalog.render(
            HighlightKind::SuspiciousKeywords,
            features.suspicious_keyword_count,
        ));
    }
    if features.suspicious_domain_count > 0 {
        highlights.push(catalog.render(
            HighlightKind::SuspiciousDomains,
            features.suspicious_domain_count,
        ));
    }
    if features.url_count > 3 {
        highlights.push(catalog.render(HighlightKind::ManyLinks, features.url_count));
    }
    if features.link_text_mismatch {
        highlights.push(catalog.render(HighlightKind::LinkTextMismatch, 0));
    }
    if features.from_domain_suspicious {
        highlights.push(catalog.render(HighlightKind::SenderDomainSuspicious, 0));
    }
    if features.reply_to_different {
        highlights.push(catalog.render(HighlightKind::ReplyToDiffers, 0));
    }
    if features.urgency_words > 2 {
        highlights.push(catalog.render(HighlightKind::ExcessiveUrgency, features.urgency_words));
    }
    if features.trust_keyword_count > 0 {
        highlights.push(catalog.render(HighlightKind::TrustSignals, features.trust_keyword_count));
    }
    highlights
}

/// Always exactly six records, in fixed name order
fn build_insights(
    features: &EmailFeatures,
    descriptions: &InsightDescriptions,
) -> Vec<AnalysisInsight> {
    vec![
        AnalysisInsight {
            name: "suspicious_keywords".to_string(),
            value: InsightValue::from(features.suspicious_keyword_count),
            weight: Some(saturate(features.suspicious_keyword_count as f64 * 0.2)),
            description: Some(descriptions.suspicious_keywords.clone()),
        },
        AnalysisInsight {
            name: "url_count".to_string(),
            value: InsightValue::from(features.url_count),
            weight: Some(saturate(features.url_count as f64 * 0.15)),
            description: Some(descriptions.url_count.clone()),
        },
        AnalysisInsight {
            name: "suspicious_domains".to_string(),
            value: InsightValue::from(features.suspicious_domain_count),
            weight: Some(saturate(features.suspicious_domain_count as f64 * 0.3)),
            description: Some(descriptions.suspicious_domains.clone()),
        },
        AnalysisInsight {
            name: "link_mismatch".to_string(),
            value: InsightValue::from(features.link_text_mismatch),
            weight: Some(if features.link_text_mismatch { 0.15 } else { 0.0 }),
            description: Some(descriptions.link_mismatch.clone()),
        },
        AnalysisInsight {
            name: "from_domain_suspicious".to_string(),
            value: InsightValue::from(features.from_domain_suspicious),
            weight: Some(if features.from_domain_suspicious {
                0.12
            } else {
                0.0
            }),
            description: Some(descriptions.from_domain_suspicious.clone()),
        },
        AnalysisInsight {
            name: "trust_signals".to_string(),
            value: InsightValue::from(features.trust_keyword_count),
            weight: Some(saturate(features.trust_keyword_count as f64 * 0.15)),
            description: Some(descriptions.trust_signals.clone()),
        },
    ]
}

//! Text normalization and feature extraction

use crate::lexicon::Lexicon;
use crate::types::{EmailContent, EmailFeatures};
use regex::Regex;

// Regex patterns, compiled once
static TAG_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").unwrap());

// `$-_` is a character range covering most ASCII punctuation, so matches
// run through the full path and query of a URL
static URL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|%[0-9a-fA-F]{2})+").unwrap()
});

static ANCHOR_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]+href=["']([^"']+)["'][^>]*>([^<]+)</a>"#).unwrap()
});

static ADDRESS_DOMAIN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"@([\w.-]+)").unwrap());

static URGENCY_REGEXES: std::sync::LazyLock<Vec<Regex>> = std::sync::LazyLock::new(|| {
    [
        r"(?i)\burgent\b",
        r"(?i)\bimmediate\b",
        r"(?i)\basap\b",
        r"(?i)\bnow\b",
        r"(?i)\bexpire\b",
        r"(?i)\blimited\b",
        r"(?i)\bact now\b",
        r"(?i)\bverify now\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Character runs unusual enough to suggest garbled or filler text
static UNUSUAL_RUN_REGEXES: std::sync::LazyLock<Vec<Regex>> = std::sync::LazyLock::new(|| {
    [r"[a-z]{15,}", r"[A-Z]{5,}", r"[0-9]{4,}"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Normalize text for keyword matching: strip `<...>` tags to a space,
/// collapse whitespace, trim, lower-case.
///
/// Idempotent and total; always returns a (possibly empty) string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, " ");
    let collapsed = WHITESPACE_REGEX.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

impl EmailFeatures {
    /// Extract the full signal set from one email.
    ///
    /// `normalized_body` and `normalized_subject` must already have been
    /// produced by [`normalize`]; the original content is still consulted
    /// wherever exact casing, punctuation, or markup matters. Pure and
    /// total over well-formed text.
    #[must_use]
    pub fn extract(
        content: &EmailContent,
        lexicon: &Lexicon,
        normalized_body: &str,
        normalized_subject: &str,
    ) -> Self {
        let haystack = format!("{normalized_body} {normalized_subject}");
        let suspicious_keyword_count = Lexicon::count_hits(&haystack, &lexicon.suspicious_phrases);
        let trust_keyword_count = Lexicon::count_hits(&haystack, &lexicon.trust_phrases);

        // URLs come from the original body so percent escapes and casing
        // survive intact
        let original_body = content.body.as_str();
        let urls: Vec<&str> = URL_REGEX
            .find_iter(original_body)
            .map(|m| m.as_str())
            .collect();
        let url_count = urls.len();
        let suspicious_domain_count = urls
            .iter()
            .filter(|url| lexicon.has_suspicious_tld(&url.to_lowercase()))
            .count();

        let original_subject = content.subject.as_deref().unwrap_or("");
        let exclamation_count = count_char(original_body, '!') + count_char(original_subject, '!');
        let question_count = count_char(original_body, '?') + count_char(original_subject, '?');

        let uppercase_ratio = uppercase_ratio(original_body);
        let body_length = original_body.chars().count();
        let subject_length = original_subject.chars().count();

        let has_html =
            content.html_body.is_some() || original_body.to_lowercase().contains("<html");
        let html_ratio = if body_length == 0 {
            0.0
        } else {
            TAG_REGEX.find_iter(original_body).count() as f64 / body_length as f64
        };

        let link_text_mismatch = check_link_text_mismatch(original_body);
        let from_domain_suspicious = content
            .from_address
            .as_deref()
            .is_some_and(|addr| lexicon.has_suspicious_tld(&extract_domain(addr).to_lowercase()));
        let reply_to_different = match (&content.reply_to, &content.from_address) {
            (Some(reply_to), Some(from)) => extract_domain(reply_to) != extract_domain(from),
            _ => false,
        };

        let urgency_words = URGENCY_REGEXES
            .iter()
            .map(|re| re.find_iter(&haystack).count())
            .sum();

        let spelling_errors_estimate = estimate_spelling_errors(normalized_body);

        Self {
            suspicious_keyword_count,
            trust_keyword_count,
            url_count,
            suspicious_domain_count,
            exclamation_count,
            question_count,
            uppercase_ratio,
            body_length,
            subject_length,
            has_html,
            html_ratio,
            link_text_mismatch,
            from_domain_suspicious,
            reply_to_different,
            urgency_words,
            spelling_errors_estimate,
        }
    }
}

fn count_char(text: &str, wanted: char) -> usize {
    text.chars().filter(|c| *c == wanted).count()
}

/// Fraction of upper-case letters among the first 1000 characters
fn uppercase_ratio(body: &str) -> f64 {
    let mut total = 0usize;
    let mut upper = 0usize;
    for c in body.chars().take(1000) {
        total += 1;
        if c.is_uppercase() {
            upper += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        upper as f64 / total as f64
    }
}

/// Domain portion after `@` in an address, empty if none matches
fn extract_domain(address: &str) -> &str {
    ADDRESS_DOMAIN_REGEX
        .captures(address)
        .and_then(|cap| cap.get(1))
        .map_or("", |m| m.as_str())
}

/// Host portion of an absolute HTTP(S) URL, without scheme, path, query,
/// or fragment. A target with no scheme is a bare path and has no host.
fn url_host(url: &str) -> String {
    let lower = url.to_lowercase();
    lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .and_then(|rest| rest.split(['/', '?', '#']).next())
        .unwrap_or("")
        .to_string()
}

/// Detect anchors whose visible text names a URL their target does not
/// match. Simple tag matching, not a markup parser; obfuscated markup may
/// evade or spuriously trigger it.
fn check_link_text_mismatch(body: &str) -> bool {
    for cap in ANCHOR_REGEX.captures_iter(body) {
        let (Some(href), Some(text)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        let host = url_host(href.as_str());
        let text_lower = text.as_str().to_lowercase();
        if text_lower.contains("http") && !text_lower.contains(&host) {
            return true;
        }
    }
    false
}

/// Unusual-run density over the normalized body, scaled to [0,1]
fn estimate_spelling_errors(normalized_body: &str) -> f64 {
    let run_count: usize = UNUSUAL_RUN_REGEXES
        .iter()
        .map(|re| re.find_iter(normalized_body).count())
        .sum();
    let word_count = normalized_body.split_whitespace().count().max(1);
    (run_count as f64 / word_count as f64 * 0.1).min(1.0)
}

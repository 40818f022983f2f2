//! RFC822/MIME decoding into analyzable content

use crate::error::{AnalyzeError, Result};
use crate::types::EmailContent;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::debug;

/// Decode raw RFC822 bytes into the textual artefacts used for analysis.
///
/// Only a total parse failure is an error; partially malformed messages
/// yield best-effort content. A message with no body decodes to an empty
/// string, not an error.
pub fn decode_message(raw: &[u8]) -> Result<EmailContent> {
    let parsed =
        mailparse::parse_mail(raw).map_err(|e| AnalyzeError::MalformedMessage(e.to_string()))?;

    let body = extract_body(&parsed);
    let html_body = extract_html_body(&parsed);
    let raw_headers = serialize_headers(&parsed);
    let subject = parsed.headers.get_first_value("Subject");
    let from_address = parsed.headers.get_first_value("From");
    let reply_to = parsed.headers.get_first_value("Reply-To");
    let to_addresses = parsed.headers.get_all_values("To");

    debug!(
        bytes = raw.len(),
        multipart = !parsed.subparts.is_empty(),
        "decoded message"
    );

    Ok(EmailContent {
        subject,
        body,
        raw_headers: Some(raw_headers),
        from_address,
        reply_to,
        to_addresses,
        html_body,
    })
}

/// Plain-text body selection.
///
/// Multipart: depth-first search for the first `text/plain` part, falling
/// back to the first sub-part's payload. Otherwise the message's own
/// payload. `get_body` applies the declared transfer encoding and charset
/// (UTF-8 default) with lossy replacement of invalid sequences.
fn extract_body(parsed: &ParsedMail) -> String {
    if !parsed.subparts.is_empty() {
        if let Some(part) = find_part(parsed, "text/plain")
            && let Ok(body) = part.get_body()
        {
            return body;
        }
        if let Ok(body) = parsed.subparts[0].get_body() {
            return body;
        }
    }
    parsed.get_body().unwrap_or_default()
}

fn extract_html_body(parsed: &ParsedMail) -> Option<String> {
    if parsed.subparts.is_empty() {
        return None;
    }
    find_part(parsed, "text/html").and_then(|part| part.get_body().ok())
}

/// Depth-first search of the part tree for a declared content type
fn find_part<'a, 'b>(parsed: &'a ParsedMail<'b>, mimetype: &str) -> Option<&'a ParsedMail<'b>> {
    for part in &parsed.subparts {
        if part.ctype.mimetype.eq_ignore_ascii_case(mimetype) {
            return Some(part);
        }
        if let Some(found) = find_part(part, mimetype) {
            return Some(found);
        }
    }
    None
}

/// Flatten every header as a `"Key: Value"` line, preserving order
fn serialize_headers(parsed: &ParsedMail) -> String {
    parsed
        .headers
        .iter()
        .map(|h| format!("{}: {}", h.get_key(), h.get_value()))
        .collect::<Vec<_>>()
        .join("\n")
}

use email_verdict::{AnalyzeError, decode_message};

#[test]
fn test_decode_simple_message() {
    let raw = b"From: John Doe <john@example.com>\r\n\
                To: recipient@example.com\r\n\
                Subject: Quarterly report\r\n\
                \r\n\
                Hello, the report is ready.";

    let content = decode_message(raw).unwrap();

    assert_eq!(content.subject.as_deref(), Some("Quarterly report"));
    assert_eq!(
        content.from_address.as_deref(),
        Some("John Doe <john@example.com>")
    );
    assert_eq!(content.to_addresses, vec!["recipient@example.com"]);
    assert!(content.body.contains("report is ready"));
    assert!(content.reply_to.is_none());
    assert!(content.html_body.is_none());
}

#[test]
fn test_decode_prefers_plain_text_part() {
    let raw = b"From: alice@example.com\r\n\
                To: bob@example.com\r\n\
                Subject: Greetings\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
                \r\n\
                --sep\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                Plain greetings here\r\n\
                --sep\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <p>HTML greetings here</p>\r\n\
                --sep--\r\n";

    let content = decode_message(raw).unwrap();

    assert!(content.body.contains("Plain greetings here"));
    assert!(!content.body.contains("<p>"));
    let html = content.html_body.unwrap();
    assert!(html.contains("<p>HTML greetings here</p>"));
}

#[test]
fn test_decode_html_only_multipart_falls_back_to_first_part() {
    let raw = b"From: alice@example.com\r\n\
                Subject: Promo\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
                \r\n\
                --sep\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <b>Only HTML</b>\r\n\
                --sep--\r\n";

    let content = decode_message(raw).unwrap();

    assert!(content.body.contains("Only HTML"));
    assert!(content.html_body.unwrap().contains("Only HTML"));
}

#[test]
fn test_decode_reply_to_header() {
    let raw = b"From: boss@company.com\r\n\
                Reply-To: boss@totally-different.ru\r\n\
                Subject: Wire transfer\r\n\
                \r\n\
                Please handle this today.";

    let content = decode_message(raw).unwrap();

    assert_eq!(
        content.reply_to.as_deref(),
        Some("boss@totally-different.ru")
    );
}

#[test]
fn test_decode_flattens_headers_in_order() {
    let raw = b"From: a@example.com\r\n\
                To: b@example.com\r\n\
                Subject: Order\r\n\
                \r\n\
                Body";

    let content = decode_message(raw).unwrap();
    let dump = content.raw_headers.unwrap();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(
        lines,
        vec![
            "From: a@example.com",
            "To: b@example.com",
            "Subject: Order",
        ]
    );
}

#[test]
fn test_decode_message_without_body() {
    let raw = b"From: a@example.com\r\nSubject: Ping\r\n\r\n";

    let content = decode_message(raw).unwrap();

    assert_eq!(content.body, "");
    assert_eq!(content.subject.as_deref(), Some("Ping"));
}

#[test]
fn test_decode_missing_headers_degrade_to_none() {
    let raw = b"Subject: Anonymous\r\n\r\nNo sender on this one.";

    let content = decode_message(raw).unwrap();

    assert!(content.from_address.is_none());
    assert!(content.reply_to.is_none());
    assert!(content.to_addresses.is_empty());
}

#[test]
fn test_decode_rejects_unparsable_input() {
    let raw = b"this first line has no colon at all\nneither does this one";

    let err = decode_message(raw).unwrap_err();
    assert!(matches!(err, AnalyzeError::MalformedMessage(_)));
}

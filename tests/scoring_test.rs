use email_verdict::{
    EmailFeatures, HighlightCatalog, HighlightKind, Verdict, Weights, score_features,
};

fn score(features: &EmailFeatures) -> f64 {
    score_features(features, &Weights::default(), &HighlightCatalog::default()).score
}

// --- scalar score ---

#[test]
fn test_base_score_for_empty_features() {
    let features = EmailFeatures::default();
    assert!((score(&features) - 0.30).abs() < 1e-9);
}

#[test]
fn test_suspicious_keywords_saturate_at_five() {
    let features = EmailFeatures {
        suspicious_keyword_count: 5,
        ..EmailFeatures::default()
    };
    assert!((score(&features) - 0.45).abs() < 1e-9);

    let more = EmailFeatures {
        suspicious_keyword_count: 20,
        ..EmailFeatures::default()
    };
    assert!((score(&more) - 0.45).abs() < 1e-9);
}

#[test]
fn test_trust_keywords_subtract() {
    let features = EmailFeatures {
        trust_keyword_count: 3,
        ..EmailFeatures::default()
    };
    assert!((score(&features) - 0.22).abs() < 1e-9);
}

#[test]
fn test_reply_to_divergence_contributes_exactly_its_weight() {
    let baseline = EmailFeatures {
        suspicious_keyword_count: 1,
        url_count: 1,
        ..EmailFeatures::default()
    };
    let diverged = EmailFeatures {
        reply_to_different: true,
        ..baseline.clone()
    };
    let delta = score(&diverged) - score(&baseline);
    assert!((delta - 0.10).abs() < 1e-9);
}

#[test]
fn test_score_is_clamped_to_unit_interval() {
    let features = EmailFeatures {
        suspicious_keyword_count: 50,
        url_count: 50,
        suspicious_domain_count: 50,
        exclamation_count: 50,
        uppercase_ratio: 1.0,
        html_ratio: 1.0,
        link_text_mismatch: true,
        from_domain_suspicious: true,
        reply_to_different: true,
        urgency_words: 50,
        spelling_errors_estimate: 1.0,
        ..EmailFeatures::default()
    };
    let result = score_features(&features, &Weights::default(), &HighlightCatalog::default());
    assert!(result.score <= 1.0);
    assert!(result.score >= 0.0);
    assert_eq!(Verdict::from_score(result.score), Verdict::Phishing);
}

#[test]
fn test_score_floor_is_zero() {
    let weights = Weights {
        base: 0.0,
        ..Weights::default()
    };
    let features = EmailFeatures {
        trust_keyword_count: 10,
        ..EmailFeatures::default()
    };
    let result = score_features(&features, &weights, &HighlightCatalog::default());
    assert!((result.score - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_scoring_is_deterministic() {
    let features = EmailFeatures {
        suspicious_keyword_count: 2,
        url_count: 4,
        suspicious_domain_count: 1,
        urgency_words: 3,
        ..EmailFeatures::default()
    };
    let a = score_features(&features, &Weights::default(), &HighlightCatalog::default());
    let b = score_features(&features, &Weights::default(), &HighlightCatalog::default());
    assert!((a.score - b.score).abs() < f64::EPSILON);
    assert_eq!(a.highlights, b.highlights);
    assert_eq!(a.insights, b.insights);
}

// --- verdict boundary ---

#[test]
fn test_verdict_boundary_at_half() {
    assert_eq!(Verdict::from_score(0.5), Verdict::Phishing);
    assert_eq!(Verdict::from_score(0.499_999), Verdict::Legitimate);
    assert_eq!(Verdict::from_score(1.0), Verdict::Phishing);
    assert_eq!(Verdict::from_score(0.0), Verdict::Legitimate);
}

// --- highlights ---

#[test]
fn test_no_highlights_for_clean_features() {
    let result = score_features(
        &EmailFeatures::default(),
        &Weights::default(),
        &HighlightCatalog::default(),
    );
    assert!(result.highlights.is_empty());
}

#[test]
fn test_highlights_follow_trigger_order() {
    let features = EmailFeatures {
        suspicious_keyword_count: 2,
        suspicious_domain_count: 1,
        url_count: 5,
        link_text_mismatch: true,
        trust_keyword_count: 1,
        ..EmailFeatures::default()
    };
    let catalog = HighlightCatalog::default();
    let result = score_features(&features, &Weights::default(), &catalog);

    let expected = vec![
        catalog.render(HighlightKind::SuspiciousKeywords, 2),
        catalog.render(HighlightKind::SuspiciousDomains, 1),
        catalog.render(HighlightKind::ManyLinks, 5),
        catalog.render(HighlightKind::LinkTextMismatch, 0),
        catalog.render(HighlightKind::TrustSignals, 1),
    ];
    assert_eq!(result.highlights, expected);
}

#[test]
fn test_url_highlight_requires_more_than_three() {
    let features = EmailFeatures {
        url_count: 3,
        ..EmailFeatures::default()
    };
    let result = score_features(&features, &Weights::default(), &HighlightCatalog::default());
    assert!(result.highlights.is_empty());
}

#[test]
fn test_highlight_templates_interpolate_counts() {
    let catalog = HighlightCatalog::default();
    let sentence = catalog.render(HighlightKind::SuspiciousKeywords, 7);
    assert!(sentence.contains('7'));
    assert!(!sentence.contains("{count}"));
}

#[test]
fn test_custom_catalog_changes_text_not_triggers() {
    let mut catalog = HighlightCatalog::default();
    catalog.suspicious_keywords = "{count} suspicious phrases detected.".to_string();

    let features = EmailFeatures {
        suspicious_keyword_count: 4,
        ..EmailFeatures::default()
    };
    let result = score_features(&features, &Weights::default(), &catalog);
    assert_eq!(result.highlights, vec!["4 suspicious phrases detected."]);
}

// --- insights ---

#[test]
fn test_exactly_six_insights_in_fixed_order() {
    let cases = [
        EmailFeatures::default(),
        EmailFeatures {
            suspicious_keyword_count: 9,
            url_count: 9,
            suspicious_domain_count: 9,
            link_text_mismatch: true,
            from_domain_suspicious: true,
            trust_keyword_count: 9,
            ..EmailFeatures::default()
        },
    ];
    for features in &cases {
        let result = score_features(features, &Weights::default(), &HighlightCatalog::default());
        let names: Vec<&str> = result.insights.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "suspicious_keywords",
                "url_count",
                "suspicious_domains",
                "link_mismatch",
                "from_domain_suspicious",
                "trust_signals",
            ]
        );
    }
}

#[test]
fn test_insight_weights_stay_in_unit_interval() {
    let features = EmailFeatures {
        suspicious_keyword_count: 100,
        url_count: 100,
        suspicious_domain_count: 100,
        trust_keyword_count: 100,
        link_text_mismatch: true,
        from_domain_suspicious: true,
        ..EmailFeatures::default()
    };
    let result = score_features(&features, &Weights::default(), &HighlightCatalog::default());
    for insight in &result.insights {
        let weight = insight.weight.unwrap();
        assert!((0.0..=1.0).contains(&weight), "weight out of range");
    }
}

#[test]
fn test_boolean_insights_gate_their_weight() {
    let clean = score_features(
        &EmailFeatures::default(),
        &Weights::default(),
        &HighlightCatalog::default(),
    );
    assert_eq!(clean.insights[3].weight, Some(0.0));
    assert_eq!(clean.insights[4].weight, Some(0.0));

    let flagged = score_features(
        &EmailFeatures {
            link_text_mismatch: true,
            from_domain_suspicious: true,
            ..EmailFeatures::default()
        },
        &Weights::default(),
        &HighlightCatalog::default(),
    );
    assert_eq!(flagged.insights[3].weight, Some(0.15));
    assert_eq!(flagged.insights[4].weight, Some(0.12));
}

//! Library API integration tests
use std::collections::HashMap;
use std::time::Duration;

use rstest::rstest;
use sitegauge_core::*;

/// A page that satisfies every default rule: title of 30 characters, meta
/// description of 100 characters, one h1, alt text everywhere, a viewport
/// tag, a CTA and a short form.
const HEALTHY_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Thirty characters of title ok</title>
        <meta name="description" content="Exactly one hundred characters of meta description content, which sits comfortably inside range.">
        <meta name="viewport" content="width=device-width, initial-scale=1">
    </head>
    <body>
        <h1>Welcome</h1>
        <h2>Details</h2>
        <img src="hero.png" alt="Hero" width="800" height="400">
        <button class="btn">Sign up</button>
        <form><input type="email" required><input type="submit" value="Go"></form>
    </body>
    </html>
"#;

const BARE_PAGE: &str = "<html><head></head><body><p>Nothing here.</p></body></html>";

fn fetched(body: &str, status: u16, elapsed: Duration) -> FetchResult {
    FetchResult {
        url: "https://example.com/".to_string(),
        status_code: status,
        headers: HashMap::new(),
        body: body.to_string(),
        elapsed,
        fetched_at: "2026-08-27T12:00:00+00:00".to_string(),
    }
}

#[test]
fn test_healthy_page_scores_100() {
    let report = analyze_html(HEALTHY_PAGE, None, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.overall_score, 100);

    let seo = report.category(Category::Seo).unwrap();
    assert_eq!(seo.score, 100);
    assert!(seo.findings.is_empty());
}

#[test]
fn test_scores_stay_in_range() {
    for html in [HEALTHY_PAGE, BARE_PAGE, "", "<div>fragment</div>", "not html at all"] {
        let report = analyze_html(html, None, &AnalysisConfig::default()).unwrap();
        assert!(report.overall_score <= 100);
        for result in &report.categories {
            assert!(result.score <= 100, "score out of range for {:?}", result.category);
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let config = AnalysisConfig::default();
    let fetch_result = fetched(BARE_PAGE, 200, Duration::from_millis(150));

    let first = analyze_fetched(&fetch_result, &config).unwrap();
    std::thread::sleep(Duration::from_millis(5));
    let second = analyze_fetched(&fetch_result, &config).unwrap();

    // Identical input must produce identical reports, timestamp included.
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.fetched_at, "2026-08-27T12:00:00+00:00");
}

#[test]
fn test_missing_title_seo_issue() {
    let report = analyze_html(BARE_PAGE, None, &AnalysisConfig::default()).unwrap();
    let seo = report.category(Category::Seo).unwrap();

    let title = seo
        .findings
        .iter()
        .find(|f| f.message.to_lowercase().contains("title"))
        .expect("title finding");
    assert_eq!(title.severity, Severity::Issue);
    assert!(seo.score <= 85);
}

#[test]
fn test_no_cta_conversion_warning() {
    let report = analyze_html(BARE_PAGE, None, &AnalysisConfig::default()).unwrap();
    let conversion = report.category(Category::Conversion).unwrap();

    assert!(conversion.score <= 90);
    assert!(conversion
        .findings
        .iter()
        .any(|f| f.severity == Severity::Warning));
}

#[test]
fn test_slow_response_performance_warning() {
    let report = analyze_fetched(&fetched(HEALTHY_PAGE, 200, Duration::from_secs(5)), &AnalysisConfig::default())
        .unwrap();
    let performance = report.category(Category::Performance).unwrap();

    assert!(performance
        .findings
        .iter()
        .any(|f| f.severity == Severity::Warning && f.message.contains("Response took")));
}

#[test]
fn test_error_status_still_analyzed() {
    let report = analyze_fetched(&fetched(HEALTHY_PAGE, 500, Duration::from_millis(100)), &AnalysisConfig::default())
        .unwrap();

    assert_eq!(report.status_code, Some(500));
    assert_eq!(report.categories.len(), 4);
    let performance = report.category(Category::Performance).unwrap();
    assert!(performance
        .findings
        .iter()
        .any(|f| f.message.contains("error status 500")));
}

#[rstest]
#[case("<title>Hi</title>", true)]
#[case("<title>A reasonable length title here</title>", false)]
#[case(
    "<title>This title is far too long to fit inside the recommended sixty character window</title>",
    true
)]
fn test_title_length_thresholds(#[case] head: &str, #[case] expect_warning: bool) {
    let html = format!("<html><head>{}</head><body></body></html>", head);
    let report = analyze_html(&html, None, &AnalysisConfig::default()).unwrap();
    let seo = report.category(Category::Seo).unwrap();

    let warned = seo
        .findings
        .iter()
        .any(|f| f.severity == Severity::Warning && f.message.contains("Title length"));
    assert_eq!(warned, expect_warning);
}

#[rstest]
#[case(0.0, 0.0, 0.0, 0.0, true)]
#[case(1.0, 1.0, 1.0, 1.0, false)]
#[case(0.25, 0.25, 0.25, 0.25, false)]
fn test_weight_validation(
    #[case] seo: f64, #[case] conversion: f64, #[case] performance: f64, #[case] mobile: f64, #[case] expect_err: bool,
) {
    let config = AnalysisConfig::builder()
        .seo_weight(seo)
        .conversion_weight(conversion)
        .performance_weight(performance)
        .mobile_weight(mobile)
        .build();

    let result = analyze_html(HEALTHY_PAGE, None, &config);
    assert_eq!(result.is_err(), expect_err);
}

#[test]
fn test_report_json_surface() {
    let report = analyze_fetched(&fetched(HEALTHY_PAGE, 200, Duration::from_millis(90)), &AnalysisConfig::default())
        .unwrap();
    let json = report_to_json(&report, &JsonConfig { pretty: true }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["url"], "https://example.com/");
    assert_eq!(value["overall_score"], 100);
    assert_eq!(value["categories"].as_array().unwrap().len(), 4);
}

#[test]
fn test_report_text_surface() {
    let report = analyze_html(BARE_PAGE, None, &AnalysisConfig::default()).unwrap();
    let text = report_to_text(&report, &TextConfig::default()).unwrap();

    assert!(text.contains("Overall score:"));
    for category in Category::ALL {
        assert!(text.contains(category.label()));
    }
}

#[test]
fn test_normalize_url_api() {
    assert!(normalize_url("example.com").is_ok());
    assert!(normalize_url("https://example.com/deep/path?q=1").is_ok());
    assert!(normalize_url("").is_err());
}

#[test]
fn test_document_api() {
    let doc = Document::parse(HEALTHY_PAGE);
    assert_eq!(doc.title(), Some("Thirty characters of title ok".to_string()));
    assert!(doc.meta_content("description").is_some());
    assert_eq!(doc.count("h1"), 1);
}

#[test]
fn test_lighthouse_absence_is_not_an_error() {
    let auditor = LighthouseCli::new("sitegauge-test-no-such-binary");
    let report = analyze_fetched_with_auditor(
        &fetched(HEALTHY_PAGE, 200, Duration::from_millis(100)),
        &AnalysisConfig::default(),
        Some(&auditor),
    )
    .unwrap();

    assert!(report.external.is_none());
    assert_eq!(report.overall_score, 100);
}

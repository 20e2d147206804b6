//! Plain text dashboard rendering.
//!
//! Renders a [`Report`] as an uncolored terminal dashboard: overall score,
//! one section per category with severity markers, and recommendations.
//! Coloring is left to the caller so the output stays testable and pipeable.

use std::fmt::Write;

use crate::Result;
use crate::report::{Report, Severity};

/// Configuration for plain text output.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include info-severity findings.
    pub show_info: bool,
    /// Include per-category recommendations.
    pub show_recommendations: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { show_info: true, show_recommendations: true }
    }
}

/// Renders a report as a plain text dashboard.
pub fn report_to_text(report: &Report, config: &TextConfig) -> Result<String> {
    let mut out = String::new();

    if let Some(url) = &report.url {
        let _ = writeln!(out, "Report for {}", url);
    } else {
        let _ = writeln!(out, "Report");
    }
    let _ = writeln!(out, "Analyzed at {}", report.fetched_at);

    if let Some(status) = report.status_code {
        let _ = writeln!(out, "Status: {}", status);
    }
    if let Some(ms) = report.response_time_ms {
        let _ = writeln!(out, "Response time: {} ms", ms);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Overall score: {}/100", report.overall_score);

    for result in &report.categories {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}/100", result.category.label(), result.score);

        for finding in &result.findings {
            if finding.severity == Severity::Info && !config.show_info {
                continue;
            }
            let _ = writeln!(out, "  [{}] {}", finding.severity.marker(), finding.message);
        }

        if config.show_recommendations {
            for recommendation in &result.recommendations {
                let _ = writeln!(out, "  -> {}", recommendation);
            }
        }
    }

    if let Some(external) = &report.external {
        let _ = writeln!(out);
        let _ = writeln!(out, "External audit: {}/100", external.score);
        for finding in &external.findings {
            let _ = writeln!(out, "  [{}] {}", finding.severity.marker(), finding.message);
        }
    }

    Ok(out)
}

/// Plain text formatter with configurable options.
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Render a report with this formatter's configuration.
    pub fn convert(&self, report: &Report) -> Result<String> {
        report_to_text(report, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{CategoryWeights, ReportMeta, aggregate};
    use crate::report::{Category, CategoryResult, Finding};

    fn sample_report(external: Option<CategoryResult>) -> Report {
        let results = Category::ALL
            .iter()
            .map(|&category| CategoryResult {
                category,
                score: 85,
                findings: vec![
                    Finding::new(category, Severity::Warning, "needs work"),
                    Finding::new(category, Severity::Info, "just so you know"),
                ],
                recommendations: vec!["Tighten this up.".to_string()],
            })
            .collect();

        let meta = ReportMeta {
            url: Some("https://example.com/".to_string()),
            fetched_at: "2026-08-27T12:00:00+00:00".to_string(),
            status_code: Some(200),
            response_time_ms: Some(321),
            page_size: Some(1024),
        };
        aggregate(meta, results, &CategoryWeights::default(), external).unwrap()
    }

    #[test]
    fn test_text_dashboard_sections() {
        let text = report_to_text(&sample_report(None), &TextConfig::default()).unwrap();

        assert!(text.contains("Report for https://example.com/"));
        assert!(text.contains("Overall score: 85/100"));
        assert!(text.contains("SEO: 85/100"));
        assert!(text.contains("Conversion: 85/100"));
        assert!(text.contains("Performance: 85/100"));
        assert!(text.contains("Mobile-Friendliness: 85/100"));
        assert!(text.contains("[!] needs work"));
        assert!(text.contains("[i] just so you know"));
        assert!(text.contains("-> Tighten this up."));
    }

    #[test]
    fn test_hide_info_findings() {
        let config = TextConfig { show_info: false, show_recommendations: true };
        let text = report_to_text(&sample_report(None), &config).unwrap();

        assert!(text.contains("[!] needs work"));
        assert!(!text.contains("just so you know"));
    }

    #[test]
    fn test_hide_recommendations() {
        let config = TextConfig { show_info: true, show_recommendations: false };
        let text = report_to_text(&sample_report(None), &config).unwrap();
        assert!(!text.contains("Tighten this up."));
    }

    #[test]
    fn test_external_section() {
        let external = CategoryResult {
            category: Category::Performance,
            score: 63,
            findings: vec![Finding::new(Category::Performance, Severity::Info, "lighthouse says hi")],
            recommendations: Vec::new(),
        };
        let text = report_to_text(&sample_report(Some(external)), &TextConfig::default()).unwrap();

        assert!(text.contains("External audit: 63/100"));
        assert!(text.contains("lighthouse says hi"));
    }

    #[test]
    fn test_formatter_matches_free_function() {
        let report = sample_report(None);
        let formatter = TextFormatter::new(TextConfig::default());
        assert_eq!(
            formatter.convert(&report).unwrap(),
            report_to_text(&report, &TextConfig::default()).unwrap()
        );
    }
}

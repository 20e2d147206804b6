//! Performance rule evaluation.
//!
//! A heuristic approximation from markup and response metadata: resource
//! counts, page weight, and response time. This is not a substitute for
//! browser-based auditing; see [`crate::external`] for hooking up a real
//! auditor as a supplementary result.

use std::time::Duration;

use crate::parse::Document;
use crate::report::{Category, CategoryResult, Finding, ScorePenalties, Severity};

/// Response metadata relevant to the performance rules.
///
/// Derived from a [`FetchResult`](crate::fetch::FetchResult); absent when
/// the HTML came from a file or stdin, in which case the metadata rules are
/// skipped.
#[derive(Debug, Clone)]
pub struct ResponseStats {
    pub status_code: u16,
    pub body_bytes: usize,
    pub elapsed: Duration,
}

/// Thresholds for the performance rules.
#[derive(Debug, Clone)]
pub struct PerformanceThresholds {
    /// External scripts above this count get flagged.
    pub max_external_scripts: usize,
    /// Stylesheets (external plus inline) above this count get flagged.
    pub max_stylesheets: usize,
    /// Images above this count get flagged.
    pub max_images: usize,
    /// Response bodies larger than this many bytes get flagged.
    pub max_page_size_bytes: usize,
    /// Responses slower than this get flagged.
    pub max_response_time: Duration,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            max_external_scripts: 10,
            max_stylesheets: 5,
            max_images: 10,
            max_page_size_bytes: 2 * 1024 * 1024,
            max_response_time: Duration::from_secs(3),
        }
    }
}

/// Evaluates the performance rules against a parsed document and, when
/// available, the fetch metadata.
pub fn evaluate(
    doc: &Document, stats: Option<&ResponseStats>, thresholds: &PerformanceThresholds, penalties: &ScorePenalties,
) -> CategoryResult {
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    check_resources(doc, stats, thresholds, &mut findings, &mut recommendations);
    if let Some(stats) = stats {
        check_response(stats, thresholds, &mut findings, &mut recommendations);
    }

    CategoryResult::from_findings(Category::Performance, findings, recommendations, penalties)
}

fn check_resources(
    doc: &Document, stats: Option<&ResponseStats>, thresholds: &PerformanceThresholds, findings: &mut Vec<Finding>,
    recs: &mut Vec<String>,
) {
    let scripts = doc.select("script").unwrap_or_default();
    let external_scripts = scripts.iter().filter(|s| s.has_attr("src")).count();
    let inline_scripts = scripts.len() - external_scripts;

    let stylesheets = doc.count(r#"link[rel="stylesheet"]"#) + doc.count("style");

    let images = doc.select("img").unwrap_or_default();
    let unsized_images = images
        .iter()
        .filter(|img| !img.has_attr("width") || !img.has_attr("height"))
        .count();

    let mut summary = format!(
        "{} scripts ({} external, {} inline), {} stylesheets, {} images",
        scripts.len(),
        external_scripts,
        inline_scripts,
        stylesheets,
        images.len()
    );
    if let Some(stats) = stats {
        summary.push_str(&format!(", {} page weight", format_bytes(stats.body_bytes)));
    }
    findings.push(Finding::new(Category::Performance, Severity::Info, summary));

    if external_scripts > thresholds.max_external_scripts {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!("{} external scripts loaded", external_scripts),
        ));
        recs.push("Bundle or defer scripts; each external script adds a request.".to_string());
    }

    if stylesheets > thresholds.max_stylesheets {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!("{} stylesheets loaded", stylesheets),
        ));
        recs.push("Combine stylesheets to cut render-blocking requests.".to_string());
    }

    if images.len() > thresholds.max_images {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!("{} images on the page", images.len()),
        ));
        recs.push("Lazy-load below-the-fold images and compress the rest.".to_string());
    }

    if unsized_images > 0 {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Info,
            format!(
                "{} images without explicit width/height (layout-shift risk)",
                unsized_images
            ),
        ));
    }
}

fn check_response(
    stats: &ResponseStats, thresholds: &PerformanceThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>,
) {
    if stats.status_code >= 400 {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!("Page returned error status {}", stats.status_code),
        ));
    }

    if stats.body_bytes > thresholds.max_page_size_bytes {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!(
                "Page size {} exceeds {}",
                format_bytes(stats.body_bytes),
                format_bytes(thresholds.max_page_size_bytes)
            ),
        ));
        recs.push("Reduce page weight; large documents are slow on constrained connections.".to_string());
    }

    if stats.elapsed > thresholds.max_response_time {
        findings.push(Finding::new(
            Category::Performance,
            Severity::Warning,
            format!(
                "Response took {:.1}s (threshold {:.1}s)",
                stats.elapsed.as_secs_f64(),
                thresholds.max_response_time.as_secs_f64()
            ),
        ));
        recs.push("Investigate server response time; aim for under a second to first byte.".to_string());
    }
}

/// Format a byte count for display.
fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

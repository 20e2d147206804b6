//! Optional external performance auditor.
//!
//! The heuristic performance evaluator never pretends to be a browser. When
//! a real auditing tool such as Lighthouse is installed, its result can be
//! attached to the report as an independent, supplementary
//! [`CategoryResult`]. The collaborator is injected as a capability: absence
//! of the tool yields `None` and is never treated as an error, and its
//! output never feeds back into the heuristic scores.

use std::process::Command;

use serde_json::Value;

use crate::report::{Category, CategoryResult, Finding, Severity};

/// A separately-invoked auditing tool producing a supplementary result.
///
/// Implementations must be side-channel only: returning `None` (tool not
/// installed, invocation failed, output unparseable) leaves the report
/// untouched apart from the missing supplement.
pub trait ExternalAuditor {
    /// Audits the given URL, returning a supplementary category result.
    fn audit(&self, url: &str) -> Option<CategoryResult>;
}

/// Runs the `lighthouse` CLI in headless JSON mode.
///
/// Maps Lighthouse's own performance category score (0.0-1.0) onto the
/// 0-100 scale and carries the top-level audit titles over as info
/// findings.
#[derive(Debug, Clone)]
pub struct LighthouseCli {
    /// Binary to invoke, `lighthouse` by default.
    pub binary: String,
}

impl Default for LighthouseCli {
    fn default() -> Self {
        Self { binary: "lighthouse".to_string() }
    }
}

impl LighthouseCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }
}

impl ExternalAuditor for LighthouseCli {
    fn audit(&self, url: &str) -> Option<CategoryResult> {
        let output = Command::new(&self.binary)
            .args([
                url,
                "--quiet",
                "--output=json",
                "--output-path=stdout",
                "--only-categories=performance",
                "--chrome-flags=--headless",
            ])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let report: Value = serde_json::from_slice(&output.stdout).ok()?;
        parse_lighthouse_report(&report)
    }
}

/// Extracts the performance score and audit summaries from a Lighthouse
/// JSON report.
fn parse_lighthouse_report(report: &Value) -> Option<CategoryResult> {
    let fraction = report
        .get("categories")?
        .get("performance")?
        .get("score")?
        .as_f64()?;
    let score = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;

    let mut findings = vec![Finding::new(
        Category::Performance,
        Severity::Info,
        format!("Lighthouse performance score: {}", score),
    )];

    if let Some(audits) = report.get("audits").and_then(Value::as_object) {
        for audit in audits.values() {
            let failed = audit
                .get("score")
                .and_then(Value::as_f64)
                .is_some_and(|s| s < 0.9);
            if failed && let Some(title) = audit.get("title").and_then(Value::as_str) {
                findings.push(Finding::new(Category::Performance, Severity::Info, title));
            }
        }
    }

    Some(CategoryResult { category: Category::Performance, score, findings, recommendations: Vec::new() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lighthouse_report() {
        let report = json!({
            "categories": { "performance": { "score": 0.87 } },
            "audits": {
                "first-contentful-paint": { "score": 0.95, "title": "First Contentful Paint" },
                "render-blocking-resources": { "score": 0.4, "title": "Eliminate render-blocking resources" }
            }
        });

        let result = parse_lighthouse_report(&report).unwrap();
        assert_eq!(result.score, 87);
        assert_eq!(result.category, Category::Performance);
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("render-blocking")));
        assert!(!result
            .findings
            .iter()
            .any(|f| f.message.contains("First Contentful Paint")));
    }

    #[test]
    fn test_parse_report_without_score() {
        let report = json!({ "categories": {} });
        assert!(parse_lighthouse_report(&report).is_none());
    }

    #[test]
    fn test_missing_binary_yields_none() {
        let auditor = LighthouseCli::new("definitely-not-a-real-binary-name");
        assert!(auditor.audit("https://example.com").is_none());
    }
}

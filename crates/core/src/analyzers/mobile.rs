//! Mobile-friendliness rule evaluation.
//!
//! Works from markup signals only: the viewport meta tag and fixed-pixel
//! widths in inline styles. Media queries live in CSS files and cannot be
//! judged from a single HTML response, so stylesheet weight is left to the
//! performance evaluator.

use regex::Regex;

use crate::parse::Document;
use crate::report::{Category, CategoryResult, Finding, ScorePenalties, Severity};

/// Matches inline styles that pin an element to a pixel width.
const FIXED_WIDTH_PATTERN: &str = r"(?i)(?:^|[\s;])width\s*:\s*\d+px";

/// Thresholds for the mobile-friendliness rules.
#[derive(Debug, Clone)]
pub struct MobileThresholds {
    /// Regex matched against inline `style` attributes to flag fixed-width
    /// elements. An invalid pattern disables the check.
    pub fixed_width_pattern: String,
}

impl Default for MobileThresholds {
    fn default() -> Self {
        Self { fixed_width_pattern: FIXED_WIDTH_PATTERN.to_string() }
    }
}

/// Evaluates the mobile-friendliness rules against a parsed document.
pub fn evaluate(doc: &Document, thresholds: &MobileThresholds, penalties: &ScorePenalties) -> CategoryResult {
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    check_viewport(doc, &mut findings, &mut recommendations);
    check_fixed_widths(doc, thresholds, &mut findings, &mut recommendations);

    CategoryResult::from_findings(Category::Mobile, findings, recommendations, penalties)
}

fn check_viewport(doc: &Document, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    match doc.meta_content("viewport") {
        None => {
            findings.push(Finding::new(Category::Mobile, Severity::Issue, "Missing viewport meta tag"));
            recs.push(
                "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> \
                 so mobile browsers scale the page correctly."
                    .to_string(),
            );
        }
        Some(content) if !content.to_lowercase().contains("width=device-width") => {
            findings.push(Finding::new(
                Category::Mobile,
                Severity::Warning,
                "Viewport meta tag does not set width=device-width",
            ));
            recs.push("Include width=device-width in the viewport tag.".to_string());
        }
        Some(_) => {}
    }
}

fn check_fixed_widths(
    doc: &Document, thresholds: &MobileThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>,
) {
    let regex = match Regex::new(&thresholds.fixed_width_pattern) {
        Ok(regex) => regex,
        Err(_) => return,
    };

    let fixed = doc
        .select("[style]")
        .unwrap_or_default()
        .iter()
        .filter(|el| el.attr("style").is_some_and(|style| regex.is_match(style)))
        .count();

    if fixed > 0 {
        findings.push(Finding::new(
            Category::Mobile,
            Severity::Warning,
            format!("{} elements use fixed pixel widths in inline styles", fixed),
        ));
        recs.push("Prefer relative units (%, rem, vw) over fixed pixel widths.".to_string());
    }
}

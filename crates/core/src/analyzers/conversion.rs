//! Conversion rule evaluation.
//!
//! Looks for the elements that turn a visitor into a lead: calls-to-action,
//! forms, and action-oriented copy.

use regex::Regex;

use crate::parse::Document;
use crate::report::{Category, CategoryResult, Finding, ScorePenalties, Severity};

/// Default keyword patterns that indicate call-to-action copy.
const CTA_KEYWORDS: [&str; 9] = [
    "sign up",
    "buy now",
    "get started",
    "subscribe",
    "learn more",
    "download",
    "try",
    "join",
    "contact",
];

/// Thresholds for the conversion rules.
#[derive(Debug, Clone)]
pub struct ConversionThresholds {
    /// A form with more input fields than this gets flagged as a
    /// conversion barrier.
    pub max_form_fields: usize,
    /// Keywords scanned for in visible text, matched case-insensitively.
    pub cta_keywords: Vec<String>,
}

impl Default for ConversionThresholds {
    fn default() -> Self {
        Self {
            max_form_fields: 5,
            cta_keywords: CTA_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Evaluates the conversion rules against a parsed document.
pub fn evaluate(doc: &Document, thresholds: &ConversionThresholds, penalties: &ScorePenalties) -> CategoryResult {
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    check_cta_elements(doc, &mut findings, &mut recommendations);
    check_forms(doc, thresholds, &mut findings, &mut recommendations);
    check_cta_copy(doc, thresholds, &mut findings, &mut recommendations);

    CategoryResult::from_findings(Category::Conversion, findings, recommendations, penalties)
}

/// Counts elements that act as calls-to-action: buttons, submit inputs, and
/// anchors styled as buttons (class containing "btn").
fn count_cta_elements(doc: &Document) -> usize {
    let buttons = doc.count("button");
    let submits = doc.count(r#"input[type="submit"]"#);
    let styled_anchors = doc
        .select("a[class]")
        .unwrap_or_default()
        .iter()
        .filter(|a| {
            a.attr("class")
                .is_some_and(|class| class.to_lowercase().contains("btn"))
        })
        .count();

    buttons + submits + styled_anchors
}

fn check_cta_elements(doc: &Document, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    let count = count_cta_elements(doc);
    if count == 0 {
        findings.push(Finding::new(
            Category::Conversion,
            Severity::Warning,
            "No clear calls-to-action found",
        ));
        recs.push("Add at least one prominent button or CTA link above the fold.".to_string());
    } else {
        findings.push(Finding::new(
            Category::Conversion,
            Severity::Info,
            format!("{} call-to-action elements found", count),
        ));
    }
}

fn check_forms(doc: &Document, thresholds: &ConversionThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    let forms = doc.select("form").unwrap_or_default();

    if forms.is_empty() {
        findings.push(Finding::new(Category::Conversion, Severity::Warning, "No forms found"));
        recs.push("Consider adding a form to capture leads.".to_string());
        return;
    }

    for (index, form) in forms.iter().enumerate() {
        let field_count = form.select("input, select, textarea").unwrap_or_default().len();
        if field_count > thresholds.max_form_fields {
            findings.push(Finding::new(
                Category::Conversion,
                Severity::Warning,
                format!("Form #{} has {} fields", index + 1, field_count),
            ));
            recs.push(format!(
                "Trim form #{} to {} fields or fewer; long forms depress completion rates.",
                index + 1,
                thresholds.max_form_fields
            ));
        }
    }

    let required = doc.count("[required]");
    if required > 0 {
        findings.push(Finding::new(
            Category::Conversion,
            Severity::Info,
            format!("{} required field indicators present", required),
        ));
    }
}

fn check_cta_copy(doc: &Document, thresholds: &ConversionThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    if thresholds.cta_keywords.is_empty() {
        return;
    }

    let pattern = thresholds
        .cta_keywords
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    let regex = match Regex::new(&format!("(?i)({})", pattern)) {
        Ok(regex) => regex,
        Err(_) => return,
    };

    if !regex.is_match(&doc.text_content()) {
        findings.push(Finding::new(
            Category::Conversion,
            Severity::Info,
            "No call-to-action phrasing found in page copy",
        ));
        recs.push("Use action-oriented copy such as \"sign up\", \"get started\" or \"contact\".".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> CategoryResult {
        let doc = Document::parse(html);
        evaluate(&doc, &ConversionThresholds::default(), &ScorePenalties::default())
    }

    #[test]
    fn test_no_cta_no_forms_scores_at_most_90() {
        let result = run("<html><body><p>Just some text.</p></body></html>");
        assert!(result.score <= 90);
        assert!(result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Warning && f.message.contains("calls-to-action")));
        assert!(result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Warning && f.message.contains("No forms")));
    }

    #[test]
    fn test_button_counts_as_cta() {
        let result = run("<html><body><button>Sign up</button><form><input></form></body></html>");
        assert!(result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Info && f.message.contains("1 call-to-action")));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_styled_anchor_counts_as_cta() {
        let result = run(r#"<html><body><a class="cta-btn primary" href="/go">Go</a></body></html>"#);
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("1 call-to-action")));
    }

    #[test]
    fn test_submit_input_counts_as_cta() {
        let result = run(r#"<html><body><form><input type="submit" value="Send"></form></body></html>"#);
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("1 call-to-action")));
    }

    #[test]
    fn test_long_form_warning() {
        let html = r#"
            <html><body>
                <form>
                    <input><input><input><input><input><input>
                </form>
                <button>Buy now</button>
            </body></html>
        "#;
        let result = run(html);
        assert!(result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Warning && f.message.contains("Form #1 has 6 fields")));
    }

    #[test]
    fn test_required_fields_noted() {
        let html = r#"<html><body><form><input required name="email"></form><button>Subscribe</button></body></html>"#;
        let result = run(html);
        assert!(result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Info && f.message.contains("required field")));
    }

    #[test]
    fn test_missing_cta_copy_is_info() {
        let html = r#"<html><body><button>Click</button><form><input></form><p>Nothing actionable here.</p></body></html>"#;
        let result = run(html);
        let copy = result
            .findings
            .iter()
            .find(|f| f.message.contains("phrasing"))
            .expect("copy finding");
        assert_eq!(copy.severity, Severity::Info);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_cta_copy_detected_case_insensitively() {
        let html = r#"<html><body><button>JOIN</button><form><input></form></body></html>"#;
        let result = run(html);
        assert!(!result.findings.iter().any(|f| f.message.contains("phrasing")));
    }
}

//! SEO rule evaluation.
//!
//! Inspects the markup signals search engines care about: the title tag,
//! meta description, heading structure, image alt text, and link hygiene.

use crate::parse::Document;
use crate::report::{Category, CategoryResult, Finding, ScorePenalties, Severity};

/// Length thresholds for the SEO rules.
///
/// Defaults follow common SEO guidance; all values are tunable.
#[derive(Debug, Clone)]
pub struct SeoThresholds {
    /// Minimum recommended title length in characters.
    pub title_min: usize,
    /// Maximum recommended title length in characters.
    pub title_max: usize,
    /// Minimum recommended meta description length in characters.
    pub description_min: usize,
    /// Maximum recommended meta description length in characters.
    pub description_max: usize,
}

impl Default for SeoThresholds {
    fn default() -> Self {
        Self { title_min: 10, title_max: 60, description_min: 50, description_max: 160 }
    }
}

/// Evaluates the SEO rules against a parsed document.
pub fn evaluate(doc: &Document, thresholds: &SeoThresholds, penalties: &ScorePenalties) -> CategoryResult {
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    check_title(doc, thresholds, &mut findings, &mut recommendations);
    check_description(doc, thresholds, &mut findings, &mut recommendations);
    check_headings(doc, &mut findings, &mut recommendations);
    check_images(doc, &mut findings, &mut recommendations);
    check_links(doc, &mut findings, &mut recommendations);

    CategoryResult::from_findings(Category::Seo, findings, recommendations, penalties)
}

fn check_title(doc: &Document, thresholds: &SeoThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    match doc.title().filter(|t| !t.is_empty()) {
        None => {
            findings.push(Finding::new(Category::Seo, Severity::Issue, "Missing <title> tag"));
            recs.push("Add a descriptive <title> tag; it is the strongest on-page ranking signal.".to_string());
        }
        Some(title) => {
            let length = title.chars().count();
            if length < thresholds.title_min || length > thresholds.title_max {
                findings.push(Finding::new(
                    Category::Seo,
                    Severity::Warning,
                    format!("Title length is {} characters", length),
                ));
                recs.push(format!(
                    "Keep the title between {} and {} characters.",
                    thresholds.title_min, thresholds.title_max
                ));
            }
        }
    }
}

fn check_description(doc: &Document, thresholds: &SeoThresholds, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    match doc.meta_content("description").filter(|d| !d.trim().is_empty()) {
        None => {
            findings.push(Finding::new(Category::Seo, Severity::Issue, "Missing meta description"));
            recs.push("Add a meta description; search engines use it for result snippets.".to_string());
        }
        Some(description) => {
            let length = description.trim().chars().count();
            if length < thresholds.description_min || length > thresholds.description_max {
                findings.push(Finding::new(
                    Category::Seo,
                    Severity::Warning,
                    format!("Meta description length is {} characters", length),
                ));
                recs.push(format!(
                    "Keep the meta description between {} and {} characters.",
                    thresholds.description_min, thresholds.description_max
                ));
            }
        }
    }
}

fn check_headings(doc: &Document, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    let h1_count = doc.count("h1");
    if h1_count == 0 {
        findings.push(Finding::new(Category::Seo, Severity::Warning, "No <h1> heading found"));
        recs.push("Add exactly one <h1> heading describing the page.".to_string());
    } else if h1_count > 1 {
        findings.push(Finding::new(
            Category::Seo,
            Severity::Warning,
            format!("Multiple <h1> headings found ({})", h1_count),
        ));
        recs.push("Use a single <h1>; demote the others to <h2>.".to_string());
    }

    if let Some((from, to)) = first_heading_skip(doc) {
        findings.push(Finding::new(
            Category::Seo,
            Severity::Info,
            format!("Heading levels skip from h{} to h{}", from, to),
        ));
    }
}

/// Finds the first place the heading sequence jumps by more than one level,
/// scanning h1-h6 in document order.
fn first_heading_skip(doc: &Document) -> Option<(u8, u8)> {
    let headings = doc.select("h1, h2, h3, h4, h5, h6").unwrap_or_default();
    let levels = headings
        .iter()
        .filter_map(|el| el.tag_name().strip_prefix('h')?.parse::<u8>().ok());

    let mut previous: Option<u8> = None;
    for level in levels {
        if let Some(prev) = previous
            && level > prev + 1
        {
            return Some((prev, level));
        }
        previous = Some(level);
    }
    None
}

fn check_images(doc: &Document, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    let images = doc.select("img").unwrap_or_default();
    let missing_alt = images.iter().filter(|img| !img.has_attr("alt")).count();

    if missing_alt > 0 {
        findings.push(Finding::new(
            Category::Seo,
            Severity::Warning,
            format!("{} of {} images are missing alt text", missing_alt, images.len()),
        ));
        recs.push("Add alt text to every image for accessibility and image search.".to_string());
    }
}

fn check_links(doc: &Document, findings: &mut Vec<Finding>, recs: &mut Vec<String>) {
    let links = doc.select("a").unwrap_or_default();
    if links.is_empty() {
        return;
    }

    let mut internal = 0usize;
    let mut external = 0usize;
    let mut empty = 0usize;

    let base_host = doc.base_url().and_then(|u| u.host_str().map(|h| h.to_string()));

    for link in &links {
        match link.attr("href").map(str::trim) {
            None | Some("") | Some("#") => empty += 1,
            Some(href) if href.starts_with("http://") || href.starts_with("https://") => {
                let same_host = base_host
                    .as_deref()
                    .zip(url::Url::parse(href).ok())
                    .is_some_and(|(base, parsed)| parsed.host_str() == Some(base));
                if same_host {
                    internal += 1;
                } else {
                    external += 1;
                }
            }
            Some(_) => internal += 1,
        }
    }

    findings.push(Finding::new(
        Category::Seo,
        Severity::Info,
        format!("{} internal links, {} external links", internal, external),
    ));

    if empty > 0 {
        findings.push(Finding::new(
            Category::Seo,
            Severity::Warning,
            format!("{} links have an empty or placeholder href", empty),
        ));
        recs.push("Point every link at a real destination or remove it.".to_string());
    }
}

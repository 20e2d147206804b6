//! Report data model: categories, findings, and scores.
//!
//! One analysis run produces a [`Report`]: four [`CategoryResult`]s (one per
//! [`Category`]) plus an overall score. Evaluators express everything they
//! observe as [`Finding`]s; the score is derived from finding severities and
//! nothing else, so any two runs over the same document produce identical
//! reports.

use serde::Serialize;

/// Analysis dimension a finding or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seo,
    Conversion,
    Performance,
    Mobile,
}

impl Category {
    /// All known categories, in report order.
    pub const ALL: [Category; 4] = [
        Category::Seo,
        Category::Conversion,
        Category::Performance,
        Category::Mobile,
    ];

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Seo => "SEO",
            Category::Conversion => "Conversion",
            Category::Performance => "Performance",
            Category::Mobile => "Mobile-Friendliness",
        }
    }
}

/// How serious one observation is.
///
/// Info findings are purely descriptive and never cost points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Issue,
}

impl Severity {
    /// Marker used by plain-text rendering.
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Issue => "x",
        }
    }
}

/// One observation produced by a rule evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(category: Category, severity: Severity, message: impl Into<String>) -> Self {
        Self { category, severity, message: message.into() }
    }
}

/// Per-severity score deductions.
///
/// Scores start at 100 and lose points per finding, saturating at 0. The
/// exact values are presentation defaults, not calibrated truths; callers
/// may tune them as long as they stay monotonic.
#[derive(Debug, Clone)]
pub struct ScorePenalties {
    /// Points deducted per issue-severity finding.
    pub issue: u8,
    /// Points deducted per warning-severity finding.
    pub warning: u8,
}

impl Default for ScorePenalties {
    fn default() -> Self {
        Self { issue: 15, warning: 5 }
    }
}

impl ScorePenalties {
    fn penalty(&self, severity: Severity) -> u16 {
        match severity {
            Severity::Info => 0,
            Severity::Warning => self.warning as u16,
            Severity::Issue => self.issue as u16,
        }
    }
}

/// Derives a 0-100 score from finding severities.
pub fn score_from_findings(findings: &[Finding], penalties: &ScorePenalties) -> u8 {
    let total = findings
        .iter()
        .map(|finding| penalties.penalty(finding.severity))
        .sum::<u16>();
    100u16.saturating_sub(total).min(100) as u8
}

/// Aggregated score, findings, and recommendations for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    /// Heuristic score in `[0, 100]`.
    pub score: u8,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
}

impl CategoryResult {
    /// Builds a result, deriving the score from the findings.
    pub fn from_findings(
        category: Category, findings: Vec<Finding>, recommendations: Vec<String>, penalties: &ScorePenalties,
    ) -> Self {
        let score = score_from_findings(&findings, penalties);
        Self { category, score, findings, recommendations }
    }

    /// Counts findings at or above warning severity.
    pub fn problem_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity >= Severity::Warning)
            .count()
    }
}

/// The full output of one analysis run.
///
/// Terminal artifact of the pipeline; nothing is persisted across runs.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Analyzed URL, when the input came from the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// RFC 3339 timestamp of when the analysis ran.
    pub fetched_at: String,
    /// HTTP status of the fetch, when fetch metadata was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Response time in milliseconds, when fetch metadata was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u128>,
    /// Body size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Weighted mean of the four category scores.
    pub overall_score: u8,
    /// One result per category, in [`Category::ALL`] order.
    pub categories: Vec<CategoryResult>,
    /// Supplementary result from an external auditor, if one ran.
    /// Never contributes to `overall_score`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<CategoryResult>,
}

impl Report {
    /// Looks up the result for one category.
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|r| r.category == category)
    }
}

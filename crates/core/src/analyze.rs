//! Main analysis API.
//!
//! This module provides the primary entry points for running one analysis:
//! [`analyze_html`] for HTML already in hand, [`analyze_fetched`] for a
//! completed fetch, and [`analyze_url`] to fetch and analyze in one step.
//! The pipeline is strictly linear: fetch, parse, the four evaluators (each
//! a pure function), aggregate.
//!
//! # Example
//!
//! ```rust
//! use sitegauge_core::{AnalysisConfig, analyze_html};
//!
//! let html = "<html><head><title>Storefront with everything</title></head></html>";
//! let report = analyze_html(html, None, &AnalysisConfig::default()).unwrap();
//! println!("overall: {}", report.overall_score);
//! ```

use crate::Result;
use crate::aggregate::{CategoryWeights, ReportMeta, aggregate};
use crate::analyzers::conversion::{self, ConversionThresholds};
use crate::analyzers::mobile::{self, MobileThresholds};
use crate::analyzers::performance::{self, PerformanceThresholds, ResponseStats};
use crate::analyzers::seo::{self, SeoThresholds};
use crate::external::ExternalAuditor;
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
use crate::fetch::{FetchConfig, FetchResult};
use crate::parse::Document;
use crate::report::{Report, ScorePenalties};

/// Configuration for one analysis run.
///
/// Bundles the fetch settings, the per-evaluator thresholds, the scoring
/// penalties, and the category weights. All defaults are sensible; use the
/// builder for targeted overrides.
///
/// # Example
///
/// ```rust
/// use sitegauge_core::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .timeout(5)
///     .seo_weight(2.0)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// HTTP fetch settings.
    pub fetch: FetchConfig,
    /// Per-severity score deductions.
    pub penalties: ScorePenalties,
    /// SEO rule thresholds.
    pub seo: SeoThresholds,
    /// Conversion rule thresholds.
    pub conversion: ConversionThresholds,
    /// Performance rule thresholds.
    pub performance: PerformanceThresholds,
    /// Mobile-friendliness rule thresholds.
    pub mobile: MobileThresholds,
    /// Category weights for the overall score.
    pub weights: CategoryWeights,
}

impl AnalysisConfig {
    /// Creates a new builder for AnalysisConfig.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }
}

/// Builder for [`AnalysisConfig`].
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalysisConfig::default() }
    }

    /// Sets the fetch timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent used for fetching.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the per-severity score penalties.
    pub fn penalties(mut self, value: ScorePenalties) -> Self {
        self.config.penalties = value;
        self
    }

    /// Replaces the SEO thresholds.
    pub fn seo_thresholds(mut self, value: SeoThresholds) -> Self {
        self.config.seo = value;
        self
    }

    /// Replaces the conversion thresholds.
    pub fn conversion_thresholds(mut self, value: ConversionThresholds) -> Self {
        self.config.conversion = value;
        self
    }

    /// Replaces the performance thresholds.
    pub fn performance_thresholds(mut self, value: PerformanceThresholds) -> Self {
        self.config.performance = value;
        self
    }

    /// Replaces the mobile-friendliness thresholds.
    pub fn mobile_thresholds(mut self, value: MobileThresholds) -> Self {
        self.config.mobile = value;
        self
    }

    /// Sets the SEO category weight.
    pub fn seo_weight(mut self, value: f64) -> Self {
        self.config.weights.seo = value;
        self
    }

    /// Sets the conversion category weight.
    pub fn conversion_weight(mut self, value: f64) -> Self {
        self.config.weights.conversion = value;
        self
    }

    /// Sets the performance category weight.
    pub fn performance_weight(mut self, value: f64) -> Self {
        self.config.weights.performance = value;
        self
    }

    /// Sets the mobile category weight.
    pub fn mobile_weight(mut self, value: f64) -> Self {
        self.config.weights.mobile = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the four evaluators over a parsed document and aggregates.
fn run_evaluators(
    doc: &Document, stats: Option<&ResponseStats>, meta: ReportMeta, config: &AnalysisConfig,
    external: Option<&dyn ExternalAuditor>,
) -> Result<Report> {
    let results = vec![
        seo::evaluate(doc, &config.seo, &config.penalties),
        conversion::evaluate(doc, &config.conversion, &config.penalties),
        performance::evaluate(doc, stats, &config.performance, &config.penalties),
        mobile::evaluate(doc, &config.mobile, &config.penalties),
    ];

    let supplement = external
        .zip(meta.url.as_deref())
        .and_then(|(auditor, url)| auditor.audit(url));

    aggregate(meta, results, &config.weights, supplement)
}

/// Analyzes an HTML string without any network I/O.
///
/// When `url` is given it is used for internal/external link classification
/// and recorded on the report. Fetch-metadata rules (response time, page
/// size, status) are skipped; page size is taken from the string length.
pub fn analyze_html(html: &str, url: Option<&str>, config: &AnalysisConfig) -> Result<Report> {
    let doc = match url {
        Some(url) => Document::parse_with_url(html, url),
        None => Document::parse(html),
    };

    let meta = ReportMeta {
        url: url.map(|u| u.to_string()),
        fetched_at: chrono::Utc::now().to_rfc3339(),
        page_size: Some(html.len()),
        ..Default::default()
    };

    run_evaluators(&doc, None, meta, config, None)
}

/// Analyzes a completed fetch.
///
/// Pure function of the fetch result: analyzing the same `FetchResult`
/// twice yields identical reports, timestamp included.
pub fn analyze_fetched(fetched: &FetchResult, config: &AnalysisConfig) -> Result<Report> {
    analyze_fetched_with_auditor(fetched, config, None)
}

/// Analyzes a completed fetch, optionally attaching an external audit.
pub fn analyze_fetched_with_auditor(
    fetched: &FetchResult, config: &AnalysisConfig, auditor: Option<&dyn ExternalAuditor>,
) -> Result<Report> {
    let doc = Document::parse_with_url(&fetched.body, &fetched.url);

    let stats = ResponseStats {
        status_code: fetched.status_code,
        body_bytes: fetched.body.len(),
        elapsed: fetched.elapsed,
    };
    let meta = ReportMeta {
        url: Some(fetched.url.clone()),
        fetched_at: fetched.fetched_at.clone(),
        status_code: Some(fetched.status_code),
        response_time_ms: Some(fetched.elapsed.as_millis()),
        page_size: Some(fetched.body.len()),
    };

    run_evaluators(&doc, Some(&stats), meta, config, auditor)
}

/// Fetches a URL and analyzes the response in one step.
#[cfg(feature = "fetch")]
pub async fn analyze_url(url: &str, config: &AnalysisConfig) -> Result<Report> {
    let fetched = fetch_url(url, &config.fetch).await?;
    analyze_fetched(&fetched, config)
}

/// Fetches a URL, analyzes it, and attaches a supplementary external audit.
#[cfg(feature = "fetch")]
pub async fn analyze_url_with_auditor(
    url: &str, config: &AnalysisConfig, auditor: &dyn ExternalAuditor,
) -> Result<Report> {
    let fetched = fetch_url(url, &config.fetch).await?;
    analyze_fetched_with_auditor(&fetched, config, Some(auditor))
}

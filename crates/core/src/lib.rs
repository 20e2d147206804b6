pub mod aggregate;
pub mod analyze;
pub mod analyzers;
pub mod error;
pub mod external;
pub mod fetch;
pub mod formatters;
pub mod parse;
pub mod report;

pub use aggregate::{CategoryWeights, ReportMeta, aggregate};
pub use analyze::{AnalysisConfig, AnalysisConfigBuilder, analyze_fetched, analyze_fetched_with_auditor, analyze_html};
#[cfg(feature = "fetch")]
pub use analyze::{analyze_url, analyze_url_with_auditor};
pub use analyzers::conversion::ConversionThresholds;
pub use analyzers::mobile::MobileThresholds;
pub use analyzers::performance::{PerformanceThresholds, ResponseStats};
pub use analyzers::seo::SeoThresholds;
pub use error::{Result, SitegaugeError};
pub use external::{ExternalAuditor, LighthouseCli};
pub use fetch::{FetchConfig, FetchResult, normalize_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, report_to_json, report_to_text};
pub use parse::{Document, Element};
pub use report::{Category, CategoryResult, Finding, Report, ScorePenalties, Severity, score_from_findings};

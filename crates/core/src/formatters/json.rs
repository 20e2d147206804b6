//! JSON report output.

use crate::report::Report;
use crate::{Result, SitegaugeError};

/// Configuration for JSON output.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output.
    pub pretty: bool,
}

/// Serializes a report as JSON.
pub fn report_to_json(report: &Report, config: &JsonConfig) -> Result<String> {
    if config.pretty {
        serde_json::to_string_pretty(report).map_err(|e| SitegaugeError::HtmlParseError(e.to_string()))
    } else {
        serde_json::to_string(report).map_err(|e| SitegaugeError::HtmlParseError(e.to_string()))
    }
}

/// JSON formatter with configurable options.
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, report: &Report) -> Result<String> {
        report_to_json(report, &self.config)
    }
}

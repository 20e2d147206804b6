//! Report aggregation.
//!
//! Combines the four category results into one [`Report`] with a weighted
//! overall score. Pure function of its arguments: no clock reads or other
//! side effects, and its only failure modes are malformed inputs (a missing
//! or duplicated category, or weights that sum to zero).

use crate::report::{Category, CategoryResult, Report};
use crate::{Result, SitegaugeError};

/// Relative weight of each category in the overall score.
///
/// Weights are normalized over their sum, so any positive scale works.
/// Defaults to equal weights.
#[derive(Debug, Clone)]
pub struct CategoryWeights {
    pub seo: f64,
    pub conversion: f64,
    pub performance: f64,
    pub mobile: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self { seo: 1.0, conversion: 1.0, performance: 1.0, mobile: 1.0 }
    }
}

impl CategoryWeights {
    fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Seo => self.seo,
            Category::Conversion => self.conversion,
            Category::Performance => self.performance,
            Category::Mobile => self.mobile,
        }
    }

    fn sum(&self) -> f64 {
        self.seo + self.conversion + self.performance + self.mobile
    }
}

/// Fetch-level metadata recorded on the report.
///
/// All fields except the timestamp are optional so file and stdin input
/// produce reports too. The timestamp is stamped by the caller (at fetch
/// completion, or at analysis start for local input), never in here, so
/// aggregation stays a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct ReportMeta {
    pub url: Option<String>,
    pub fetched_at: String,
    pub status_code: Option<u16>,
    pub response_time_ms: Option<u128>,
    pub page_size: Option<usize>,
}

/// Combines category results into a report.
///
/// Requires exactly one result per known category. The optional `external`
/// result (e.g. from a Lighthouse run) is attached as supplementary data and
/// never enters the overall score.
///
/// # Errors
///
/// Returns [`SitegaugeError::ConfigError`] when a category is missing or
/// duplicated, or when the configured weights do not sum to a positive
/// value.
pub fn aggregate(
    meta: ReportMeta, results: Vec<CategoryResult>, weights: &CategoryWeights, external: Option<CategoryResult>,
) -> Result<Report> {
    let weight_sum = weights.sum();
    if !(weight_sum > 0.0) || !weight_sum.is_finite() {
        return Err(SitegaugeError::ConfigError(
            "category weights must sum to a positive value".to_string(),
        ));
    }

    let mut ordered = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let mut matches = results.iter().filter(|r| r.category == category);
        let result = matches
            .next()
            .ok_or_else(|| SitegaugeError::ConfigError(format!("missing result for category {}", category.label())))?;
        if matches.next().is_some() {
            return Err(SitegaugeError::ConfigError(format!(
                "duplicate result for category {}",
                category.label()
            )));
        }
        ordered.push(result.clone());
    }

    let weighted_sum: f64 = ordered
        .iter()
        .map(|r| weights.weight(r.category) * r.score as f64)
        .sum();
    let overall_score = (weighted_sum / weight_sum).round().clamp(0.0, 100.0) as u8;

    Ok(Report {
        url: meta.url,
        fetched_at: meta.fetched_at,
        status_code: meta.status_code,
        response_time_ms: meta.response_time_ms,
        page_size: meta.page_size,
        overall_score,
        categories: ordered,
        external,
    })
}

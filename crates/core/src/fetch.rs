//! Page fetching over HTTP.
//!
//! This module performs the single HTTP GET that feeds an analysis run and
//! captures the response metadata (status, headers, timing) the Performance
//! evaluator needs alongside the body.

use std::collections::HashMap;
use std::time::Duration;
#[cfg(feature = "fetch")]
use std::time::Instant;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{Result, SitegaugeError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (compatible; Sitegauge/1.0; +https://github.com/stormlightlabs/sitegauge)"
                .to_string(),
        }
    }
}

/// The raw result of fetching one page.
///
/// Immutable once constructed; evaluators only ever read from it. A non-2xx
/// status is carried here as data, not surfaced as an error, so evaluators
/// can report it as a finding.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Final URL after scheme normalization.
    pub url: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Response headers, flattened to string pairs.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
    /// Wall time from request start to body completion.
    pub elapsed: Duration,
    /// RFC 3339 timestamp of when the fetch completed.
    pub fetched_at: String,
}

/// Normalizes user input into a parseable HTTP(S) URL.
///
/// Input without a scheme gets `https://` prepended; anything that still
/// fails to parse, or uses a non-HTTP scheme, is rejected as
/// [`SitegaugeError::InvalidUrl`].
pub fn normalize_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SitegaugeError::InvalidUrl("empty URL".to_string()));
    }

    let candidate = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{}", trimmed) };

    let parsed = Url::parse(&candidate).map_err(|e| SitegaugeError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(SitegaugeError::InvalidUrl(format!(
            "unsupported scheme '{}': only http and https are analyzable",
            other
        ))),
    }
}

/// Fetches a page and captures the response metadata.
///
/// This function performs a single HTTP GET request with a bounded timeout
/// and no retries. It follows redirects and uses a browser-like User-Agent
/// for better compatibility. Responses with status >= 400 still return
/// `Ok` so the analysis can report the error status as a finding.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<FetchResult> {
    let parsed_url = normalize_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SitegaugeError::HttpError)?;

    let started = Instant::now();

    let response = client
        .get(parsed_url.clone())
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SitegaugeError::Timeout { timeout: config.timeout }
            } else {
                SitegaugeError::HttpError(e)
            }
        })?;

    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            SitegaugeError::Timeout { timeout: config.timeout }
        } else {
            SitegaugeError::HttpError(e)
        }
    })?;

    let elapsed = started.elapsed();
    let fetched_at = chrono::Utc::now().to_rfc3339();

    Ok(FetchResult { url: parsed_url.to_string(), status_code, headers, body, elapsed, fetched_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("Sitegauge"));
    }

    #[test]
    fn test_normalize_url_adds_scheme() {
        let url = normalize_url("example.com/page").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_url_keeps_http() {
        let url = normalize_url("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_normalize_url_rejects_empty() {
        assert!(matches!(normalize_url("  "), Err(SitegaugeError::InvalidUrl(_))));
    }

    #[test]
    fn test_normalize_url_rejects_other_schemes() {
        assert!(matches!(
            normalize_url("ftp://example.com"),
            Err(SitegaugeError::InvalidUrl(_))
        ));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("http://", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(SitegaugeError::InvalidUrl(_))));
    }

    #[test]
    fn test_error_timeout_message() {
        let err = SitegaugeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }
}

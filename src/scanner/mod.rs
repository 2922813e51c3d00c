use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::debug;

use crate::errors::CorsinatorError;
use crate::models::{ScanOutcome, VULNERABLE_HEADERS};

/// Issues one HEAD request per target and inspects the response
/// headers for CORS exposure.
pub struct CorsScanner {
    client: Client,
}

impl CorsScanner {
    /// Builds the scanner with the configured request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, CorsinatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("corsinator/", env!("CARGO_PKG_VERSION")))
            // HEAD probes inspect the headers of the URL as given;
            // redirects are not followed.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Sends a single blocking-in-sequence HEAD request and scores the
    /// response. Network errors bubble up to the caller, which decides
    /// whether the run continues.
    pub async fn check(&self, url: &str) -> Result<ScanOutcome, CorsinatorError> {
        let response = self.client.head(url).send().await?;
        let confidence = confidence_level(response.headers());
        debug!(url, confidence, status = %response.status(), "HEAD response inspected");
        Ok(ScanOutcome::Checked {
            is_vulnerable: confidence > 0.0,
            confidence,
        })
    }
}

/// Prepends `https://` when the target has no recognized scheme.
///
/// The check is a literal prefix match on "http": inputs like
/// `httpfoo.com` are passed through untouched and fail at request time.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Fraction of the four CORS headers present in the response, rounded
/// to two decimals. Header lookup is case-insensitive per `HeaderMap`.
pub fn confidence_level(headers: &HeaderMap) -> f64 {
    let present = VULNERABLE_HEADERS
        .iter()
        .filter(|name| headers.contains_key(**name))
        .count();
    round2(present as f64 / VULNERABLE_HEADERS.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers_with(names: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for name in names {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static("*"),
            );
        }
        headers
    }

    #[test]
    fn test_confidence_for_each_header_count() {
        let lowered: Vec<&'static str> = vec![
            "access-control-allow-origin",
            "access-control-allow-methods",
            "access-control-allow-headers",
            "access-control-allow-credentials",
        ];
        for k in 0..=4 {
            let headers = headers_with(&lowered[..k]);
            let confidence = confidence_level(&headers);
            let expected = round2(k as f64 / 4.0);
            assert_eq!(confidence, expected, "k = {k}");
            assert_eq!(confidence > 0.0, k > 0, "k = {k}");
        }
    }

    #[test]
    fn test_confidence_single_origin_header() {
        let headers = headers_with(&["access-control-allow-origin"]);
        assert_eq!(confidence_level(&headers), 0.25);
    }

    #[test]
    fn test_confidence_ignores_unrelated_headers() {
        let headers = headers_with(&["content-type", "server"]);
        assert_eq!(confidence_level(&headers), 0.0);
    }

    #[test]
    fn test_normalize_url_prepends_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("safe.test/path"), "https://safe.test/path");
    }

    #[test]
    fn test_normalize_url_keeps_schemed_urls() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_url_literal_prefix_match() {
        // "httpfoo.com" starts with "http" and is sent as-is.
        assert_eq!(normalize_url("httpfoo.com"), "httpfoo.com");
    }
}

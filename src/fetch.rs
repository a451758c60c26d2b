use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use reqwest::Url;
use tracing::info;

use crate::config::Settings;

/// Parse a page URL, accepting only http and https.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("Unsupported URL scheme '{}' (expected http or https)", other),
    }
}

/// Fetch a page and return its body decoded as UTF-8.
pub async fn fetch_page(url: &Url, settings: &Settings) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    info!("Fetching page: {}", url);
    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;
    info!(
        "Fetched {} bytes in {}ms",
        bytes.len(),
        start.elapsed().as_millis()
    );

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(parse_url("https://example.com/page").is_ok());
        assert!(parse_url("  http://example.com ").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        let err = parse_url("ftp://example.com/file").unwrap_err();
        assert!(err.to_string().contains("ftp"));
        assert!(parse_url("file:///etc/hosts").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_url("not a url").is_err());
        assert!(parse_url("").is_err());
    }
}

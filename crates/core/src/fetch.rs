//! Page fetching from jisho.org, local files, and stdin.
//!
//! The HTTP functions are thin: one GET per call, the configured timeout, no
//! retries. Reading saved pages from disk or stdin lets the extractors run
//! offline.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::{Client, Response, StatusCode};
#[cfg(feature = "fetch")]
use serde::de::DeserializeOwned;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{JishoError, Result};

/// HTTP client configuration for fetching pages and API results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "Mozilla/5.0 (compatible; jisho-core/1.0)".to_string() }
    }
}

/// Outcome of fetching a page whose absence is a normal answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedPage {
    /// The page body.
    Found(String),
    /// The server answered 404.
    NotFound,
}

#[cfg(feature = "fetch")]
async fn send(url: &str, config: &FetchConfig, accept: &str) -> Result<Response> {
    let parsed_url = Url::parse(url).map_err(|e| JishoError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(JishoError::HttpError)?;

    tracing::debug!(url = %parsed_url, "fetching");

    client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", accept)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                JishoError::Timeout { timeout: config.timeout }
            } else {
                JishoError::HttpError(e)
            }
        })
}

#[cfg(feature = "fetch")]
fn status_error(status: StatusCode, url: &str) -> JishoError {
    JishoError::HttpStatus { status: status.as_u16(), url: url.to_string() }
}

#[cfg(feature = "fetch")]
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Fetches an HTML page and returns its body.
///
/// Any non-success status is an error, including 404.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let response = send(url, config, HTML_ACCEPT).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, url));
    }

    let content = response.text().await?;

    Ok(content)
}

/// Fetches an HTML page, reporting a 404 as [`FetchedPage::NotFound`].
#[cfg(feature = "fetch")]
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Result<FetchedPage> {
    let response = send(url, config, HTML_ACCEPT).await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(url, "page not found");
        return Ok(FetchedPage::NotFound);
    }
    if !status.is_success() {
        return Err(status_error(status, url));
    }

    Ok(FetchedPage::Found(response.text().await?))
}

/// Fetches a JSON document and deserializes it into `T`.
#[cfg(feature = "fetch")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str, config: &FetchConfig) -> Result<T> {
    let response = send(url, config, "application/json").await?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, url));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Reads a saved page from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(JishoError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(JishoError::from)
    }
}

/// Reads a saved page from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(JishoError::from)?;

    Ok(buffer)
}

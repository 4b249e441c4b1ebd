//! Authenticated JSON fetch and shared response checks.
//!
//! [`JsonFetch`] is the seam between the walker/assembler and the network.
//! [`HttpFetcher`] is the reqwest implementation; tests swap in fixtures.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap};
use rmc_config::GitHubConfig;
use serde_json::Value;

use crate::error::GitHubError;

/// Media type requested from the REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// One authenticated GET returning parsed JSON.
pub trait JsonFetch: Send + Sync {
    /// Fetch `url` and parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] on transport failure, non-success status or
    /// an unparseable body.
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value, GitHubError>> + Send;
}

/// reqwest-backed [`JsonFetch`] that attaches the token and accept headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    token: Option<String>,
}

impl HttpFetcher {
    /// Build a fetcher from the GitHub section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying client fails to build.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        if !config.is_configured() {
            tracing::warn!("no GitHub token configured; using the unauthenticated rate limit");
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            token: config.is_configured().then(|| config.token.clone()),
        })
    }
}

impl JsonFetch for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, GitHubError> {
        tracing::debug!(url, "GitHub request");

        let mut request = self.http.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let resp = check_response(request.send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429**, or **403** with `x-ratelimit-remaining: 0` → [`GitHubError::RateLimited`]
///   with the `x-ratelimit-reset` epoch when present.
/// - **Non-success status** → [`GitHubError::Api`] with the body's `message`.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GitHubError> {
    let status = resp.status();
    if status == 429 || (status == 403 && quota_exhausted(resp.headers())) {
        return Err(GitHubError::RateLimited {
            status: status.as_u16(),
            reset_epoch_secs: parse_rate_limit_reset(resp.headers()),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(GitHubError::Api {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason()),
        });
    }
    Ok(resp)
}

fn quota_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

fn parse_rate_limit_reset(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn error_message(body: &str, reason: Option<&str>) -> String {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reason.unwrap_or("unknown error").to_string(),
    }
}

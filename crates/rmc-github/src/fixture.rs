//! In-memory [`JsonFetch`] for tests.
//!
//! Routes are keyed by full URL. Unrouted URLs answer 404. Every request is
//! recorded so tests can assert on call counts and order.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::GitHubError;
use crate::http::JsonFetch;

#[derive(Debug, Clone)]
enum Route {
    Json(Value),
    Status(u16, String),
}

#[derive(Debug, Default)]
pub struct FixtureFetcher {
    routes: HashMap<String, Route>,
    calls: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    #[must_use]
    pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
        self.routes.insert(url.into(), Route::Json(body));
        self
    }

    /// Answer `url` with a non-success status.
    #[must_use]
    pub fn with_status(mut self, url: impl Into<String>, status: u16, message: &str) -> Self {
        self.routes
            .insert(url.into(), Route::Status(status, message.to_string()));
        self
    }

    /// URLs requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl JsonFetch for FixtureFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, GitHubError> {
        self.calls
            .lock()
            .map_err(|_| GitHubError::Parse("call log poisoned".to_string()))?
            .push(url.to_string());

        match self.routes.get(url) {
            Some(Route::Json(body)) => Ok(body.clone()),
            Some(Route::Status(status, message)) => Err(GitHubError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Err(GitHubError::Api {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}

//! HTTP client for the PipeRun CRM API.
//!
//! This module provides a synchronous client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every request is a single authenticated GET;
//! there are no retries.

mod async_wrapper;
pub use async_wrapper::{AsyncPipeRunClient, AsyncPipeRunClientImpl};

use crate::config::Config;
use crate::error::{PipeRunApiError, PipeRunApiResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the PipeRun API.
///
/// The underlying agent keeps no idle connections, so each call opens its own
/// connection and releases it when the response has been read or the call fails.
#[derive(Clone)]
pub struct PipeRunClient {
    /// Base URL for the PipeRun API (including the version segment)
    base_url: String,

    /// Bearer token for authentication
    token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl PipeRunClient {
    /// Create a new PipeRunClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.piperun_api_url.clone(),
            config.piperun_token.clone(),
            config.request_timeout.map(Duration::from_secs),
        )
    }

    /// Create a PipeRunClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self::build(base_url, token, None)
    }

    fn build(base_url: String, token: String, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new().max_idle_connections(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            base_url,
            token,
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from an endpoint path and query pairs.
    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        let mut url = format!("{}/{}", base, endpoint);

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Issue one authenticated GET and return the parsed JSON body.
    ///
    /// # Errors
    /// * `Http` - the API answered 4xx/5xx (status and raw body are kept)
    /// * `Transport` - the request never produced a response, or the body could not be read
    /// * `Json` - the body was not valid JSON
    pub fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> PipeRunApiResult<Value> {
        let url = self.build_url(endpoint, params);
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("GET {}", url);

        let response = match self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Content-Type", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::warn!("GET {} - Error: {}", url, error);
                return Err(error);
            }
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                timer.complete_with_error();
                return Err(PipeRunApiError::Transport(e.to_string()));
            }
        };
        timer.complete();

        Ok(serde_json::from_str(&body)?)
    }

    /// Map a ureq error to a PipeRunApiError.
    fn map_error(error: ureq::Error) -> PipeRunApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                PipeRunApiError::Http { status, body }
            }
            ureq::Error::Transport(transport) => PipeRunApiError::Transport(transport.to_string()),
        }
    }
}

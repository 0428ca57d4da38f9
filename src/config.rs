//! Configuration management for the PipeRun MCP Server.
//!
//! Configuration is read once at process entry. Missing the API token is
//! fatal: the server must not start without it. A `.env` file is loaded with
//! `dotenvy`, which does not write to stdout (MCP uses stdout for framing).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default PipeRun API base URL (versioned).
pub const DEFAULT_API_URL: &str = "https://api.pipe.run/v1";

/// Configuration for the PipeRun MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// PipeRun API base URL
    pub piperun_api_url: String,

    /// PipeRun API token, sent as a bearer token
    pub piperun_token: String,

    /// HTTP request timeout in seconds (None: no client-side timeout)
    pub request_timeout: Option<u64>,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    ///
    /// Required environment variables:
    /// - `PIPERUN_TOKEN`: API token for authentication
    ///
    /// Optional environment variables:
    /// - `PIPERUN_API_URL`: Base URL (default: `https://api.pipe.run/v1`)
    /// - `PIPERUN_REQUEST_TIMEOUT`: HTTP timeout in seconds (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Ignore a missing .env file
        let _ = dotenvy::dotenv();

        Self::from_current_env()
    }

    /// Build configuration from the variables currently set, without `.env`.
    pub fn from_current_env() -> ConfigResult<Self> {
        let piperun_token = env::var("PIPERUN_TOKEN")
            .map_err(|_| ConfigError::MissingVar("PIPERUN_TOKEN".to_string()))?;

        if piperun_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PIPERUN_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let piperun_api_url =
            env::var("PIPERUN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !piperun_api_url.starts_with("http://") && !piperun_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PIPERUN_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_timeout("PIPERUN_REQUEST_TIMEOUT")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            piperun_api_url,
            piperun_token,
            request_timeout,
            log_level,
        })
    }

    /// Parse an optional, strictly positive number of seconds.
    fn parse_env_timeout(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Some(secs)),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number of seconds, got: {}", val),
                }),
            },
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            piperun_api_url: DEFAULT_API_URL.to_string(),
            piperun_token: String::new(),
            request_timeout: None,
            log_level: "error".to_string(),
        }
    }
}

//! Error types for the PipeRun MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when querying the PipeRun API.
#[derive(Error, Debug)]
pub enum PipeRunApiError {
    /// API answered with a non-success status code
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure (DNS, connection refused/reset, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to parse or decode the JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The blocking worker running the request did not complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PipeRunApiError
pub type PipeRunApiResult<T> = Result<T, PipeRunApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

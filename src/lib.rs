//! PipeRun MCP Server - a Model Context Protocol server for PipeRun CRM activities.
//!
//! Exposes four read-only tools (list, fetch by id, filter by type, filter by
//! user) that each perform a single GET against the PipeRun API and return a
//! human-readable text report.
//!
//! # Architecture
//!
//! - **config**: Configuration loaded once from environment variables
//! - **error**: Error types for configuration and API failures
//! - **client**: Blocking HTTP client and its async wrapper
//! - **metrics**: Request counters
//! - **models**: Activity data and query parameters
//! - **repositories**: Activity access over the client
//! - **tools**: Query operations and report rendering
//! - **server**: MCP protocol server (stdio)

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod tools;

pub use client::PipeRunClient;
pub use config::Config;
pub use error::{ConfigError, PipeRunApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Activity, ActivityPage, ActivityQuery};
pub use server::PipeRunMcpServer;
pub use tools::ActivityTools;

//! PipeRun MCP Server - Main entry point
//!
//! Serves the PipeRun activity tools over MCP stdio. Refuses to start without
//! a PipeRun API token.

use anyhow::Result;
use piperun_mcp_server::client::{AsyncPipeRunClient, AsyncPipeRunClientImpl};
use piperun_mcp_server::repositories::{ActivityRepository, PipeRunActivityRepository};
use piperun_mcp_server::{Config, PipeRunClient, PipeRunMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; stdout carries MCP messages
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting PipeRun MCP Server with API URL: {}",
        config.piperun_api_url
    );

    let sync_client = PipeRunClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncPipeRunClientImpl::new(sync_client)) as Arc<dyn AsyncPipeRunClient>;

    let activity_repo =
        Arc::new(PipeRunActivityRepository::new(client)) as Arc<dyn ActivityRepository>;

    let server = PipeRunMcpServer::new(activity_repo);

    info!("Starting MCP server with stdio transport");
    piperun_mcp_server::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        "PipeRun MCP Server shutdown complete"
    );
    Ok(())
}

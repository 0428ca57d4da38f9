//! MCP server implementation for PipeRun activities.
//!
//! This module provides the MCP protocol server that exposes the activity
//! query tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::PipeRunMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the PipeRun MCP server with stdio transport.
///
/// Communicates over stdin/stdout and returns when the client disconnects.
pub async fn run_server(server: PipeRunMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}

//! MCP tool handlers for the PipeRun server.
//!
//! This module exposes the activity tools using the rmcp SDK's tool_router pattern.
//! Every tool returns a single text item; failures are reported as text too.

use crate::models::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::repositories::ActivityRepository;
use crate::tools::ActivityTools;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// The PipeRun MCP server exposing read-only activity tools.
#[derive(Clone)]
pub struct PipeRunMcpServer {
    activity_tools: Arc<ActivityTools>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PipeRunMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "piperun-activities".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for PipeRun CRM - lists activities, shows activity details, and filters activities by type or assigned user.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetActivitiesParams {
    /// Maximum number of activities to return (default: 10)
    #[serde(default)]
    limit: Option<i64>,
    /// Page number for pagination (default: 1)
    #[serde(default)]
    page: Option<i64>,
    /// Filter by status: 'open', 'in_progress', 'done', 'canceled'
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ActivityIdParams {
    /// ID of the activity
    activity_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FilterByTypeParams {
    /// Activity type (e.g. "call", "meeting", "email")
    activity_type: String,
    /// Maximum number of activities to return (default: 10)
    #[serde(default)]
    limit: Option<i64>,
    /// Page number for pagination (default: 1)
    #[serde(default)]
    page: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ActivitiesByUserParams {
    /// ID of the PipeRun user
    user_id: i64,
    /// Maximum number of activities to return (default: 10)
    #[serde(default)]
    limit: Option<i64>,
    /// Page number for pagination (default: 1)
    #[serde(default)]
    page: Option<i64>,
    /// Filter by status: 'open', 'in_progress', 'done', 'canceled'
    #[serde(default)]
    status: Option<String>,
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl PipeRunMcpServer {
    /// Create a new PipeRun MCP server.
    pub fn new(activity_repo: Arc<dyn ActivityRepository>) -> Self {
        Self {
            activity_tools: Arc::new(ActivityTools::new(activity_repo)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List PipeRun activities with pagination, optionally filtered by status ('open', 'in_progress', 'done', 'canceled')."
    )]
    async fn get_activities(
        &self,
        params: Parameters<GetActivitiesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let report = self
            .activity_tools
            .list_activities(
                params.limit.unwrap_or(DEFAULT_LIMIT),
                params.page.unwrap_or(DEFAULT_PAGE),
                params.status.as_deref(),
            )
            .await;

        text_result(report)
    }

    #[tool(
        description = "Get the details of a PipeRun activity by ID, including its deal, company and comments."
    )]
    async fn get_activity_by_id(
        &self,
        params: Parameters<ActivityIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = self.activity_tools.get_activity(params.0.activity_id).await;
        text_result(report)
    }

    #[tool(description = "List PipeRun activities of a given type (e.g. call, meeting, email).")]
    async fn filter_activities_by_type(
        &self,
        params: Parameters<FilterByTypeParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let report = self
            .activity_tools
            .filter_by_type(
                &params.activity_type,
                params.limit.unwrap_or(DEFAULT_LIMIT),
                params.page.unwrap_or(DEFAULT_PAGE),
            )
            .await;

        text_result(report)
    }

    #[tool(
        description = "List PipeRun activities assigned to a user, optionally filtered by status."
    )]
    async fn activities_by_user(
        &self,
        params: Parameters<ActivitiesByUserParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let report = self
            .activity_tools
            .activities_by_user(
                params.user_id,
                params.limit.unwrap_or(DEFAULT_LIMIT),
                params.page.unwrap_or(DEFAULT_PAGE),
                params.status.as_deref(),
            )
            .await;

        text_result(report)
    }
}

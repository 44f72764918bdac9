//! MCP tool handlers for the scheduling server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::SchedulingError;
use crate::services::{SchedulingService, SearchLinksParams};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes scheduling link discovery tools.
#[derive(Clone)]
pub struct SchedulingMcpServer {
    service: Arc<dyn SchedulingService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for SchedulingMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "scheduling-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some("Scheduling Link Discovery MCP Server".into()),
                website_url: None,
            },
            instructions: Some("Finds public Cal.com and Calendly booking links for a person at a company. Cal.com searches need an org_id (see get_organization_info); Calendly searches use the token's own organization.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchSchedulingLinksParams {
    /// Platform to search on: 'calcom' or 'calendly'
    platform: String,
    /// Full name of the person to search for
    name: String,
    /// Company name to match against
    company: String,
    /// Organization ID (required for Cal.com)
    #[serde(default)]
    org_id: Option<String>,
    /// API key override (optional)
    #[serde(default)]
    api_key: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct OrganizationInfoParams {
    /// Platform: 'calcom' or 'calendly'
    platform: String,
    /// API key or PAT (optional if set in environment)
    #[serde(default)]
    api_key: Option<String>,
}

// Invalid input maps to INVALID_PARAMS, everything else to INTERNAL_ERROR.
fn to_mcp_error(e: SchedulingError) -> McpError {
    let code = if e.is_invalid_parameters() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn serialization_error(e: serde_json::Error) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Static description of the server and its tools.
pub fn server_info_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Scheduling Link Discovery MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "available_tools": [
            "search_scheduling_links - Search for booking links on Cal.com or Calendly",
            "get_scheduling_config - Check API credential configuration status",
            "get_organization_info - Get organization IDs for Cal.com or Calendly",
            "get_server_info - Get this server information",
        ],
        "usage_examples": {
            "search_calcom": {
                "platform": "calcom",
                "name": "John Doe",
                "company": "TechCorp",
                "org_id": "your_cal_org_id",
                "api_key": "optional_cal_api_key",
            },
            "search_calendly": {
                "platform": "calendly",
                "name": "Jane Smith",
                "company": "AcmeCorp",
                "api_key": "optional_calendly_pat",
            },
        },
    })
}

// Tool router implementation
#[tool_router]
impl SchedulingMcpServer {
    /// Create a new scheduling MCP server.
    pub fn new(service: Arc<dyn SchedulingService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Search for booking links for a person at a company.
    #[tool(
        description = "Search for scheduling links across Cal.com and Calendly platforms for a specific person and company. For Cal.com, org_id is required. For Calendly, the authenticated user's organization is used automatically."
    )]
    async fn search_scheduling_links(
        &self,
        params: Parameters<SearchSchedulingLinksParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .service
            .search_scheduling_links(SearchLinksParams {
                platform: params.platform,
                name: params.name,
                company: params.company,
                org_id: params.org_id,
                api_key: params.api_key,
            })
            .await
            .map_err(|e| {
                tracing::error!("Scheduling link search failed: {}", e);
                to_mcp_error(e)
            })?;

        let json_response = serde_json::to_string_pretty(&response).map_err(serialization_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Report which credentials are configured.
    #[tool(
        description = "Get current configuration status for scheduling API credentials. Returns the configuration status without exposing actual credential values."
    )]
    async fn get_scheduling_config(&self) -> Result<CallToolResult, McpError> {
        let status = self.service.scheduling_config();
        let json_response = serde_json::to_string_pretty(&status).map_err(serialization_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Look up organization ids for later searches.
    #[tool(
        description = "Get organization information for the authenticated user to find organization IDs for subsequent Cal.com or Calendly searches."
    )]
    async fn get_organization_info(
        &self,
        params: Parameters<OrganizationInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let info = self
            .service
            .organization_info(&params.platform, params.api_key)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&info).map_err(serialization_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Organization information for {}:\n\n{}",
            info.platform().as_str(),
            json_response
        ))]))
    }

    /// Describe the server and its tools.
    #[tool(description = "Get server information including available tools and usage examples.")]
    async fn get_server_info(&self) -> Result<CallToolResult, McpError> {
        let json_response =
            serde_json::to_string_pretty(&server_info_payload()).map_err(serialization_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}

//! MCP server implementation for scheduling link discovery.
//!
//! This module provides the MCP protocol server that exposes the search,
//! configuration and organization tools to AI assistants.

pub mod handlers;

pub use handlers::SchedulingMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the scheduling MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects or a fatal error occurs.
pub async fn run_server(server: SchedulingMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

//! Scheduling MCP Server - Main entry point
//!
//! Serves the scheduling link tools over the Model Context Protocol on stdio.

use anyhow::Result;
use scheduling_mcp_server::client::{
    AsyncCalcomClient, AsyncCalcomClientImpl, AsyncCalendlyClient, AsyncCalendlyClientImpl,
};
use scheduling_mcp_server::services::SchedulingService;
use scheduling_mcp_server::{
    CalcomClient, CalendlyClient, Config, SchedulingMcpServer, SchedulingServiceImpl,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // dotenv first so LOG_LEVEL from .env reaches the filter
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    // RUST_LOG wins, then LOG_LEVEL, then "error"
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| match std::env::var("LOG_LEVEL") {
            Ok(level) if !level.trim().is_empty() => EnvFilter::try_new(level.trim()),
            _ => EnvFilter::try_new("error"),
        })
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
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
        "Starting Scheduling MCP Server (Cal.com: {}, Calendly: {})",
        config.calcom_api_url, config.calendly_api_url
    );
    info!("Default credentials: {:?}", config.credentials);

    let calcom = Arc::new(AsyncCalcomClientImpl::new(CalcomClient::new(&config)))
        as Arc<dyn AsyncCalcomClient>;
    let calendly = Arc::new(AsyncCalendlyClientImpl::new(CalendlyClient::new(&config)))
        as Arc<dyn AsyncCalendlyClient>;

    let service = Arc::new(SchedulingServiceImpl::new(
        calcom,
        calendly,
        config.credentials.clone(),
    )) as Arc<dyn SchedulingService>;

    let server = SchedulingMcpServer::new(service);

    info!("Starting MCP server with stdio transport");
    scheduling_mcp_server::server::run_server(server).await?;

    info!("Scheduling MCP Server shutdown complete");
    Ok(())
}

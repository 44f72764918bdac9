//! Validates the configured Cal.com and Calendly credentials against the live APIs.
//!
//! Exits non-zero when a configured platform fails its check. Platforms with
//! no credentials configured are reported but do not fail the run.

use anyhow::Result;
use scheduling_mcp_server::client::{AsyncCalcomClientImpl, AsyncCalendlyClientImpl};
use scheduling_mcp_server::services::CredentialChecker;
use scheduling_mcp_server::{CalcomClient, CalendlyClient, Config};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let timeout = config.credential_check_timeout;

    let checker = CredentialChecker::new(
        Arc::new(AsyncCalcomClientImpl::new(CalcomClient::with_timeout(
            &config, timeout,
        ))),
        Arc::new(AsyncCalendlyClientImpl::new(CalendlyClient::with_timeout(
            &config, timeout,
        ))),
        config.credentials.clone(),
    );

    println!("Checking scheduling API credentials (timeout {}s)", timeout);

    let mut failed = false;
    for (platform, outcome) in checker.check_all().await {
        println!("{:<9} {}", platform.display_name(), outcome);
        failed |= outcome.is_failed();
    }

    if failed {
        println!("\nSome credential checks failed.");
        Ok(ExitCode::FAILURE)
    } else {
        println!("\nAll configured credentials are working.");
        Ok(ExitCode::SUCCESS)
    }
}

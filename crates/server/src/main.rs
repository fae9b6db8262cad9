//! cupdash server entry point.
//!
//! Loads the finals dataset once, then serves it either as the HTTP dashboard
//! or as MCP tools on stdio. Logging goes to stderr so the MCP transport keeps
//! stdout to itself.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

use cupdash_client::{load_dataset, source_from_config};
use cupdash_core::{AppConfig, Error, ServeMode};

mod error;
mod handler;
mod http;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    tracing::info!(mode = ?config.serve_mode, source = %config.source_url, "starting cupdash");

    let source = source_from_config(&config)?;
    let dataset = match load_dataset(source.as_ref(), &config.caption).await {
        Ok(dataset) => Arc::new(dataset),
        Err(err @ Error::TableNotFound(_)) => {
            tracing::error!("{err}");
            eprintln!("Could not find the correct table.");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    match config.serve_mode {
        ServeMode::Http => http::serve(dataset, config.socket_addr()?).await?,
        ServeMode::Mcp => {
            let handler = handler::CupDashServer::new(dataset);
            let server = serve_server(handler, stdio()).await?;
            server.waiting().await?;
        }
    }

    Ok(())
}

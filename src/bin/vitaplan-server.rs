// ABOUTME: Server binary that wires configuration, storage, and the plan pipeline together
// ABOUTME: Starts the HTTP service exposing plan generation and retrieval endpoints
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Vitaplan Server Binary
//!
//! Starts the health-plan HTTP service with database-backed persistence
//! and optional LLM-assisted plan generation.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use vitaplan::{
    config::environment::ServerConfig, database::Database, logging::LoggingConfig,
    resources::ServerResources, routes,
};

#[derive(Parser)]
#[command(name = "vitaplan-server")]
#[command(about = "Vitaplan - health plan generation and tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    LoggingConfig::from_env().init()?;

    info!("Starting Vitaplan server");
    info!("{}", config.summary());

    if !config.llm.enabled {
        warn!("LLM generation disabled, plans will use the deterministic generator");
    }

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let router = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!("Listening on port {http_port}");

    axum::serve(listener, router).await?;

    Ok(())
}

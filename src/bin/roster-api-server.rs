// ABOUTME: Server binary for the read-only coach roster API
// ABOUTME: Loads configuration, connects storage, and serves HTTP until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Roster API Server Binary
//!
//! Starts the coach roster HTTP API against the database named by `DATABASE_URL`.

use anyhow::Result;
use clap::Parser;
use roster_api::{
    config::{DatabaseUrl, ServerConfig},
    database::{CoachStore, Database},
    logging,
    resources::ServerResources,
    server::RosterServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "roster-api-server")]
#[command(about = "Coach roster API - lookup, filtered listing, and spreadsheet/CSV export")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    info!("Starting Roster API");
    info!("{}", config.summary());

    let database = Database::connect(&config.database).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(
        Arc::new(database),
        Arc::clone(&config),
    ));
    let server = RosterServer::new(resources);

    display_available_endpoints(&config);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let root = format!("http://{}:{}", config.host, config.http_port);
    let coaches = format!("{root}{}/coaches", config.base_path);

    info!("=== Available API Endpoints ===");
    info!("Coaches:");
    info!("   Get Coach:         GET {coaches}/{{id}}");
    info!("   List Coaches:      GET {coaches}?search=|return=all_list|country=");
    info!("   Export Workbook:   GET {coaches}/export");
    info!("   Export CSV:        GET {coaches}/export.csv");
    info!("Monitoring:");
    info!("   Health:            GET {root}/health");
    info!("   Readiness:         GET {root}/ready");
    info!("=== End of Endpoint List ===");
}

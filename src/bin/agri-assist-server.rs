// ABOUTME: Server binary for the plant disease detection and crop recommendation service
// ABOUTME: Loads configuration, initializes logging and serves the UI and API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! # Agri Assist Server Binary
//!
//! Serves the interactive page and the JSON API on one port.

use agri_assist::{config::ServerConfig, logging, server};
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "agri-assist-server")]
#[command(about = "Agri Assist - plant disease detection and crop recommendation backed by Gemini")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available Endpoints ===");
    info!("  Interactive UI:       GET  {base}/");
    info!("  Disease detection:    POST {base}/api/disease-detection");
    info!("  Crop recommendation:  POST {base}/api/crop-recommendation");
    info!("  Health:               GET  {base}/health");
}

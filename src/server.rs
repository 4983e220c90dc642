// ABOUTME: HTTP server lifecycle: binding, serving the router and graceful shutdown
// ABOUTME: Builds the Gemini provider and analysis service from server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::llm::GeminiProvider;
use crate::routes::{build_router, AppState};
use crate::services::AnalysisService;

/// Build the production handler state around a Gemini provider
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_state(config: ServerConfig) -> Result<AppState> {
    let provider = GeminiProvider::new(config.model.clone())
        .context("Failed to initialize Gemini provider")?;
    let analysis = AnalysisService::new(Arc::new(provider), &config.model);
    Ok(AppState::new(analysis, config))
}

/// Serve until the process receives Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let app = build_router(build_state(config)?);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}

// ABOUTME: Route module organization for the Agri Assist HTTP endpoints
// ABOUTME: Assembles UI, API and health routes with tracing, CORS and a body size limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Route module for Agri Assist
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to [`AnalysisService`].

/// Crop recommendation API route
pub mod crop;
/// Disease detection API route
pub mod disease;
/// Health check route
pub mod health;
/// Interactive page and tab endpoints
pub mod ui;

mod form;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::services::AnalysisService;

/// Crop recommendation route handlers
pub use crop::CropRoutes;
/// Disease detection route handlers
pub use disease::DiseaseRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// Interactive UI route handlers
pub use ui::UiRoutes;

/// Shared, immutable handler state
#[derive(Clone)]
pub struct AppState {
    /// Analysis flows
    pub analysis: Arc<AnalysisService>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Bundle the service and configuration
    #[must_use]
    pub fn new(analysis: AnalysisService, config: ServerConfig) -> Self {
        Self {
            analysis: Arc::new(analysis),
            config: Arc::new(config),
        }
    }
}

/// Build the application router
///
/// Extractors stop reading bodies above `MAX_UPLOAD_BYTES`; handlers report
/// that as a 413 JSON error.
pub fn build_router(state: AppState) -> Router {
    let cors = setup_cors(&state.config.cors);
    let body_limit = state.config.uploads.max_bytes;

    Router::new()
        .merge(UiRoutes::routes())
        .merge(DiseaseRoutes::routes())
        .merge(CropRoutes::routes())
        .merge(HealthRoutes::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

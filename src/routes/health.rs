// ABOUTME: Health check route for service monitoring and load balancer probes
// ABOUTME: Optionally verifies the model provider is reachable with the configured key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Health check routes for service monitoring

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::AppState;
use crate::constants::service_names;

/// `GET /health` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    /// Also probe the model provider
    #[serde(default)]
    pub deep: bool,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    pub fn routes() -> Router<AppState> {
        Router::new().route("/health", get(health_handler))
    }
}

async fn health_handler(
    State(state): State<AppState>,
    Query(query): Query<HealthQuery>,
) -> Json<Value> {
    let provider = state.analysis.provider();
    let mut body = json!({
        "status": "healthy",
        "service": service_names::AGRI_ASSIST_SERVER,
        "version": env!("CARGO_PKG_VERSION"),
        "model": provider.model(),
    });

    if query.deep {
        let reachable = provider.health_check().await.unwrap_or_else(|e| {
            warn!(provider = provider.name(), error = %e, "Model health check failed");
            false
        });
        body["model_reachable"] = Value::Bool(reachable);
    }

    Json(body)
}

// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the HTTP request helpers, the scripted provider and app builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod scripted_provider;

use std::path::Path;
use std::sync::Arc;

use agri_assist::config::{ModelConfig, ServerConfig, UploadConfig};
use agri_assist::routes::{build_router, AppState};
use agri_assist::services::AnalysisService;
use axum::Router;

use scripted_provider::ScriptedProvider;

/// Server configuration staging uploads in `upload_dir`
#[allow(dead_code)]
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        uploads: UploadConfig {
            directory: upload_dir.to_path_buf(),
            ..UploadConfig::default()
        },
        model: ModelConfig {
            api_key: Some("test-key".to_owned()),
            ..ModelConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Router backed by `provider`
#[allow(dead_code)]
pub fn test_app(provider: Arc<ScriptedProvider>, config: ServerConfig) -> Router {
    let analysis = AnalysisService::new(provider, &config.model);
    build_router(AppState::new(analysis, config))
}

/// Number of entries left in `dir`
#[allow(dead_code)]
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

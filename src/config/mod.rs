// ABOUTME: Configuration module aggregating environment-driven settings
// ABOUTME: Exposes server, upload, CORS and model configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

/// Server, upload and CORS configuration loaded from the environment
pub mod environment;

/// Model credentials, generation and safety settings
pub mod model;

pub use environment::{CorsConfig, ServerConfig, UploadConfig};
pub use model::{GenerationSettings, ModelConfig, SafetyThreshold, HARM_CATEGORIES};

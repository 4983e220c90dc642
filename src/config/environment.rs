// ABOUTME: Environment configuration management for the HTTP server
// ABOUTME: Handles bind address, upload storage, CORS and model settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use super::model::{env_var_or, parse_env, ModelConfig};
use crate::constants::{defaults, env_keys};

/// Where uploaded images are staged and how large they may be
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Directory for temporary upload files
    pub directory: PathBuf,
    /// Maximum request body size for uploads, in bytes
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: env::temp_dir(),
            max_bytes: defaults::MAX_UPLOAD_BYTES,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Model client and prompt settings
    pub model: ModelConfig,
    /// Upload staging
    pub uploads: UploadConfig,
    /// CORS
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            model: ModelConfig::default(),
            uploads: UploadConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_var_or(env_keys::HOST, defaults::HOST),
            http_port: parse_env(env_keys::HTTP_PORT, defaults::HTTP_PORT)?,
            model: ModelConfig::from_env()?,
            uploads: UploadConfig {
                directory: env::var(env_keys::UPLOAD_DIR)
                    .map_or_else(|_| env::temp_dir(), PathBuf::from),
                max_bytes: parse_env(env_keys::MAX_UPLOAD_BYTES, defaults::MAX_UPLOAD_BYTES)?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.uploads.max_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_BYTES must be greater than zero"));
        }

        if self.model.model.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_MODEL cannot be empty"));
        }

        if !self.model.has_api_key() {
            warn!(
                "{} is not set; model calls will fail until it is configured",
                env_keys::GOOGLE_API_KEY
            );
        }

        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary with secrets redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Agri Assist Server Configuration:\n\
             - Bind Address: {}\n\
             - Model: {}\n\
             - API Key: {}\n\
             - Generation: temperature={} top_p={} top_k={} max_output_tokens={}\n\
             - Safety Threshold: {}\n\
             - Language Directive Scope: {}\n\
             - Upload Directory: {}\n\
             - Max Upload Bytes: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.model.model,
            if self.model.has_api_key() {
                "Configured"
            } else {
                "Missing"
            },
            self.model.generation.temperature,
            self.model.generation.top_p,
            self.model.generation.top_k,
            self.model.generation.max_output_tokens,
            self.model.safety_threshold,
            self.model.language_scope,
            self.uploads.directory.display(),
            self.uploads.max_bytes,
            self.cors.allowed_origins,
        )
    }
}

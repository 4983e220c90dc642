// ABOUTME: Main library entry point for the Agri Assist plant health service
// ABOUTME: Provides prompt building, Gemini invocation, response cleanup and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Agri Assist
//!
//! Turns a leaf photograph plus a farmer's location, or a soil profile, into
//! advisory text from a multimodal generative model.
//!
//! ## Features
//!
//! - **Disease detection**: diagnosis, severity, treatment and prevention for an uploaded image
//! - **Regional insights**: diseases common around the farmer's area, district and state
//! - **Crop recommendation**: crops suited to soil type, pH, nutrients, texture and location
//! - **Two boundaries**: an embedded interactive page and a JSON API
//!
//! ## Architecture
//!
//! - **Prompts**: fixed templates per request kind
//! - **LLM**: provider trait with a Gemini implementation
//! - **Services**: the analysis flows shared by both boundaries
//! - **Routes**: thin axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agri_assist::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     agri_assist::server::run(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants: environment keys, defaults, field names and messages
pub mod constants;

/// Unified error handling
pub mod errors;

/// Generative model providers
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain types shared across layers
pub mod models;

/// Model output cleanup
pub mod normalize;

/// Prompt templates
pub mod prompts;

/// HTTP routes
pub mod routes;

/// Server lifecycle
pub mod server;

/// Analysis services
pub mod services;

/// Interactive page and tab flows
pub mod ui;

/// Temporary upload storage
pub mod uploads;

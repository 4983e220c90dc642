// ABOUTME: Core types for the Agri Assist plant health service
// ABOUTME: Foundation crate with the unified error type shared by the server and its tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Agri Assist Core
//!
//! Foundation crate providing the error model for the Agri Assist service.
//! Kept separate so that it changes rarely and compiles once.
//!
//! Enable the `http-response` feature to render [`errors::AppError`] as an
//! axum response.

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

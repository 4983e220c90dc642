// ABOUTME: HTTP middleware configuration for the plant health API
// ABOUTME: Currently provides the cross-origin policy layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

pub mod cors;

// CORS configuration
pub use cors::setup_cors;

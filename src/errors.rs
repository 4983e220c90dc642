// ABOUTME: Re-exports the unified error types from the core crate
// ABOUTME: Lets server modules write `crate::errors::AppError` regardless of where it lives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

pub use agri_assist_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};

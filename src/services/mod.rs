// ABOUTME: Domain service layer shared by the UI and API route handlers
// ABOUTME: Houses the analysis service that drives prompt building and model calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Domain service layer
//!
//! Route handlers stay thin: they parse transport input and hand a typed
//! request to a service, so both boundaries share one set of rules.

/// Disease diagnosis, regional insight and crop suggestion flows
pub mod analysis;

pub use analysis::{AnalysisService, DiseaseReport, ResponseFormat};

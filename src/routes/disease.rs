// ABOUTME: Disease detection API route taking a leaf photograph and farmer location
// ABOUTME: Stages the upload, runs diagnosis then regional insight, always removes the file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use super::form::{missing_image, PlantHealthForm};
use super::AppState;
use crate::constants::{defaults, messages};
use crate::errors::{AppError, AppResult};
use crate::models::DiseaseDetectionResponse;
use crate::uploads::{read_image_data, TempUpload};

/// Disease detection API routes
pub struct DiseaseRoutes;

impl DiseaseRoutes {
    /// Create the disease detection routes
    pub fn routes() -> Router<AppState> {
        Router::new().route("/api/disease-detection", post(handle_disease_detection))
    }
}

/// `POST /api/disease-detection`
///
/// A body that is not multipart counts as a missing image. Everything that
/// fails after the image check is reported as a 500.
async fn handle_disease_detection(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<DiseaseDetectionResponse>> {
    let multipart = multipart.map_err(|rejection| missing_image(&rejection))?;
    let form = PlantHealthForm::from_multipart(multipart).await?;
    let location = form.location();
    let language = form
        .language
        .unwrap_or_else(|| defaults::LANGUAGE.to_owned());
    let image = form
        .image
        .ok_or_else(|| AppError::invalid_input(messages::NO_IMAGE_UPLOADED))?;

    let upload = TempUpload::persist(
        &state.config.uploads,
        &image.bytes,
        image.file_name.as_deref(),
    )
    .map_err(AppError::into_server_error)?;

    let result = async {
        let image_data = read_image_data(upload.path(), image.content_type.as_deref()).await?;
        state
            .analysis
            .disease_and_regional(image_data, &language, &location)
            .await
    }
    .await;
    drop(upload);

    let report = result.map_err(AppError::into_server_error)?;
    info!(language = %language, "Disease detection completed");

    Ok(Json(DiseaseDetectionResponse {
        disease_analysis: report.disease_analysis.into_string(),
        regional_insights: report.regional_insights.into_string(),
    }))
}

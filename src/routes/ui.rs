// ABOUTME: Routes serving the interactive page and the endpoints its two tabs call
// ABOUTME: Returns panel text, with placeholders for incomplete input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::form::{rejection_error, PlantHealthForm};
use super::AppState;
use crate::constants::{defaults, messages};
use crate::errors::AppResult;
use crate::models::{CropRecommendationResponse, PlantHealthPanels, SoilProfile};
use crate::ui::{self, PlantHealthInput};
use crate::uploads::{read_image_data, TempUpload};

/// Interactive UI routes
pub struct UiRoutes;

impl UiRoutes {
    /// Create the page and tab endpoints
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/", get(index))
            .route("/ui/plant-health", post(plant_health))
            .route("/ui/crop-suggestions", post(crop_suggestions))
    }
}

async fn index() -> Html<String> {
    Html(ui::render_index())
}

async fn plant_health(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<PlantHealthPanels>> {
    // Without a multipart body there is nothing uploaded
    let form = match multipart {
        Ok(multipart) => PlantHealthForm::from_multipart(multipart).await?,
        Err(_) => PlantHealthForm::default(),
    };
    let location = form.location();
    let language = form
        .language
        .unwrap_or_else(|| defaults::LANGUAGE.to_owned());

    // The staged file only lives for the read
    let image = match form.image {
        Some(part) => {
            let upload = TempUpload::persist(
                &state.config.uploads,
                &part.bytes,
                part.file_name.as_deref(),
            )?;
            Some(read_image_data(upload.path(), part.content_type.as_deref()).await?)
        }
        None => None,
    };

    let panels = ui::plant_health_panels(
        &state.analysis,
        PlantHealthInput {
            image,
            language,
            location,
        },
    )
    .await?;

    Ok(Json(panels))
}

async fn crop_suggestions(
    State(state): State<AppState>,
    body: Result<Json<SoilProfile>, JsonRejection>,
) -> AppResult<Json<CropRecommendationResponse>> {
    let Json(soil) = body.map_err(|rejection| {
        rejection_error(
            rejection.status(),
            rejection.body_text(),
            messages::BODY_NOT_JSON_OBJECT,
        )
    })?;
    let recommendations = ui::crop_panel(&state.analysis, &soil).await?;
    Ok(Json(CropRecommendationResponse { recommendations }))
}

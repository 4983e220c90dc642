// ABOUTME: Crop recommendation API route taking a soil profile as a JSON object
// ABOUTME: Validates required fields in a fixed order before any model call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Map, Value};

use super::form::rejection_error;
use super::AppState;
use crate::constants::{defaults, fields, messages};
use crate::errors::{AppError, AppResult};
use crate::models::{CropRecommendationResponse, SoilProfile};

/// Crop recommendation API routes
pub struct CropRoutes;

impl CropRoutes {
    /// Create the crop recommendation routes
    pub fn routes() -> Router<AppState> {
        Router::new().route("/api/crop-recommendation", post(handle_crop_recommendation))
    }
}

async fn handle_crop_recommendation(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<CropRecommendationResponse>> {
    let object = match body {
        Ok(Json(Value::Object(object))) => object,
        Ok(_) => return Err(AppError::invalid_input(messages::BODY_NOT_JSON_OBJECT)),
        Err(rejection) => {
            return Err(rejection_error(
                rejection.status(),
                rejection.body_text(),
                messages::BODY_NOT_JSON_OBJECT,
            ))
        }
    };
    let soil = soil_profile(&object)?;

    let recommendations = state
        .analysis
        .crop_suggestions(&soil, defaults::LANGUAGE)
        .await
        .map_err(AppError::into_server_error)?;

    Ok(Json(CropRecommendationResponse {
        recommendations: recommendations.into_string(),
    }))
}

/// Build a soil profile, failing on the first absent required key
///
/// Presence is all that is checked: `null`, numbers and nested values are
/// accepted and rendered as JSON text.
fn soil_profile(object: &Map<String, Value>) -> AppResult<SoilProfile> {
    let [soil_type, ph_level, nutrients, texture, location] = fields::CROP_REQUIRED;
    let field = |name: &str| {
        object
            .get(name)
            .map(render)
            .ok_or_else(|| AppError::missing_field(name))
    };

    Ok(SoilProfile {
        soil_type: field(soil_type)?,
        ph_level: field(ph_level)?,
        nutrients: field(nutrients)?,
        texture: field(texture)?,
        location: field(location)?,
    })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_first_missing_field_in_order() {
        let body = object(json!({"ph_level": "6.5", "texture": "loam"}));
        let error = soil_profile(&body).expect_err("soil_type missing");
        assert_eq!(error.message, "Missing soil_type");

        let body = object(json!({
            "soil_type": "Clay", "ph_level": "6.5", "nutrients": "High N", "texture": "fine"
        }));
        let error = soil_profile(&body).expect_err("location missing");
        assert_eq!(error.message, "Missing location");
    }

    #[test]
    fn test_non_string_values_render_as_json() {
        let body = object(json!({
            "soil_type": "Clay", "ph_level": 6.5, "nutrients": ["N", "K"],
            "texture": null, "location": "Kerala"
        }));
        let soil = soil_profile(&body).expect("all fields present");
        assert_eq!(soil.ph_level, "6.5");
        assert_eq!(soil.nutrients, r#"["N","K"]"#);
        assert_eq!(soil.texture, "null");
        assert_eq!(soil.location, "Kerala");
    }
}

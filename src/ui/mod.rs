// ABOUTME: Interactive single-page UI and the panel flows behind its two tabs
// ABOUTME: Maps missing form input to inline placeholder text instead of error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Interactive UI
//!
//! The page is embedded at compile time. Its disease tab fills two panels;
//! each panel is computed independently, so a missing region still lets the
//! image be diagnosed and vice versa.

use std::fmt::Write as _;

use crate::constants::{defaults, messages};
use crate::errors::AppResult;
use crate::models::{ImageData, Language, Location, PlantHealthPanels, SoilProfile};
use crate::services::AnalysisService;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Input of the disease tab
#[derive(Debug, Clone, Default)]
pub struct PlantHealthInput {
    /// Uploaded image, if any
    pub image: Option<ImageData>,
    /// Selected output language; blank counts as not selected
    pub language: String,
    /// Farmer location
    pub location: Location,
}

/// Fill both disease tab panels
///
/// Without an image no model call is made. With an image, the diagnosis runs
/// first and the regional insight second.
///
/// # Errors
///
/// Returns the first model failure.
pub async fn plant_health_panels(
    service: &AnalysisService,
    input: PlantHealthInput,
) -> AppResult<PlantHealthPanels> {
    let Some(image) = input.image else {
        return Ok(PlantHealthPanels {
            image_analysis: messages::UPLOAD_IMAGE_FIRST.to_owned(),
            regional_insights: String::new(),
        });
    };

    let image_analysis = if input.language.trim().is_empty() {
        messages::MISSING_FILE_OR_LANGUAGE.to_owned()
    } else {
        service
            .detect_disease(image, &input.language, &input.location)
            .await?
            .into_string()
    };

    let regional_insights = if input.location.is_complete() {
        service
            .regional_insights(&input.location, &input.language)
            .await?
            .into_string()
    } else {
        messages::MISSING_REGION.to_owned()
    };

    Ok(PlantHealthPanels {
        image_analysis,
        regional_insights,
    })
}

/// Fill the crop tab panel; fields are passed through unchecked
///
/// # Errors
///
/// Returns the model failure, if any.
pub async fn crop_panel(service: &AnalysisService, soil: &SoilProfile) -> AppResult<String> {
    Ok(service
        .crop_suggestions(soil, defaults::LANGUAGE)
        .await?
        .into_string())
}

/// Render the page with the language dropdown filled in
#[must_use]
pub fn render_index() -> String {
    INDEX_TEMPLATE
        .replace("{{LANGUAGE_OPTIONS}}", &language_options())
        .replace("{{VERSION}}", env!("CARGO_PKG_VERSION"))
}

fn language_options() -> String {
    Language::ALL
        .iter()
        .fold(String::new(), |mut options, language| {
            let selected = if *language == Language::default() {
                " selected"
            } else {
                ""
            };
            let _ = writeln!(
                options,
                r#"<option value="{name}"{selected}>{name}</option>"#,
                name = language.as_str()
            );
            options
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_language_with_english_selected() {
        let page = render_index();
        for language in Language::ALL {
            assert!(page.contains(&format!(r#"value="{}""#, language.as_str())));
        }
        assert!(page.contains(r#"<option value="English" selected>English</option>"#));
        assert!(!page.contains("{{"));
    }
}

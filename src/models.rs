// ABOUTME: Domain models for plant health and crop recommendation requests
// ABOUTME: Defines languages, locations, soil profiles, image payloads and analysis requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! # Domain Models
//!
//! An [`AnalysisRequest`] is built per UI or API event and dropped once the
//! response is returned. Field values are free-form strings; presence checks
//! belong to the boundary that collects them.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::prompts::{PromptBuilder, PromptText};

/// Output languages offered by the interactive UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Hindi
    Hindi,
    /// Malayalam
    Malayalam,
    /// Tamil
    Tamil,
    /// Telugu
    Telugu,
}

impl Language {
    /// Dropdown order
    pub const ALL: [Self; 5] = [
        Self::English,
        Self::Hindi,
        Self::Malayalam,
        Self::Tamil,
        Self::Telugu,
    ];

    /// Language name as interpolated into prompts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Malayalam => "Malayalam",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the farmer is, as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Area or village
    #[serde(default)]
    pub area: String,
    /// District
    #[serde(default)]
    pub district: String,
    /// State
    #[serde(default)]
    pub state: String,
}

impl Location {
    /// Create a location from its three parts
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        district: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            district: district.into(),
            state: state.into(),
        }
    }

    /// True when every part has non-blank content
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.area, &self.district, &self.state]
            .iter()
            .all(|part| !part.trim().is_empty())
    }
}

/// Soil descriptors for a crop suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilProfile {
    /// e.g. Clay, Sandy, Loamy
    #[serde(default)]
    pub soil_type: String,
    /// e.g. 6.5
    #[serde(default)]
    pub ph_level: String,
    /// e.g. High N, Low P
    #[serde(default)]
    pub nutrients: String,
    /// e.g. 60% sand, 30% silt
    #[serde(default)]
    pub texture: String,
    /// e.g. Kerala, India
    #[serde(default)]
    pub location: String,
}

/// Image bytes plus the MIME type sent to the model
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    /// MIME type, `image/jpeg` unless the upload declared another image type
    pub mime_type: String,
    /// Raw image bytes
    pub data: Bytes,
}

impl ImageData {
    /// Wrap bytes, keeping `declared` only when it is an `image/*` type
    #[must_use]
    pub fn new(data: impl Into<Bytes>, declared: Option<&str>) -> Self {
        let mime_type = declared
            .filter(|mime| mime.starts_with("image/"))
            .unwrap_or(defaults::IMAGE_MIME_TYPE)
            .to_owned();
        Self {
            mime_type,
            data: data.into(),
        }
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// The three fixed request kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Image-based disease analysis
    Disease,
    /// Regional disease prevalence
    RegionalInsight,
    /// Crops suited to a soil profile
    CropSuggestion,
}

impl AnalysisKind {
    /// Stable name for logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::RegionalInsight => "regional_insight",
            Self::CropSuggestion => "crop_suggestion",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-initiated query
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    /// Diagnose the plant in `image`
    Disease {
        /// Uploaded photograph
        image: ImageData,
        /// Output language name
        language: String,
        /// Farmer location
        location: Location,
    },
    /// Describe diseases common around `location`
    RegionalInsight {
        /// Farmer location
        location: Location,
        /// Output language name, used only when the directive scope covers all prompts
        language: String,
    },
    /// Suggest crops for `soil`
    CropSuggestion {
        /// Soil descriptors
        soil: SoilProfile,
        /// Output language name, used only when the directive scope covers all prompts
        language: String,
    },
}

impl AnalysisRequest {
    /// Request kind
    #[must_use]
    pub const fn kind(&self) -> AnalysisKind {
        match self {
            Self::Disease { .. } => AnalysisKind::Disease,
            Self::RegionalInsight { .. } => AnalysisKind::RegionalInsight,
            Self::CropSuggestion { .. } => AnalysisKind::CropSuggestion,
        }
    }

    /// Image attached to the request, if any
    #[must_use]
    pub const fn image(&self) -> Option<&ImageData> {
        match self {
            Self::Disease { image, .. } => Some(image),
            Self::RegionalInsight { .. } | Self::CropSuggestion { .. } => None,
        }
    }

    /// Build the prompt for this request
    #[must_use]
    pub fn prompt(&self, builder: &PromptBuilder) -> PromptText {
        match self {
            Self::Disease {
                language, location, ..
            } => builder.disease(language, location),
            Self::RegionalInsight { location, language } => {
                builder.regional_insight(location, language)
            }
            Self::CropSuggestion { soil, language } => builder.crop_suggestion(soil, language),
        }
    }
}

/// Response body of `POST /api/disease-detection`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseDetectionResponse {
    /// Normalized disease analysis
    pub disease_analysis: String,
    /// Normalized regional insight
    pub regional_insights: String,
}

/// Response body of the crop recommendation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendationResponse {
    /// Model recommendations
    pub recommendations: String,
}

/// Response body of `POST /ui/plant-health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantHealthPanels {
    /// Disease analysis panel text or placeholder
    pub image_analysis: String,
    /// Regional insight panel text or placeholder
    pub regional_insights: String,
}

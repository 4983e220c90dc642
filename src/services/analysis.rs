// ABOUTME: Analysis service turning plant health and soil queries into model calls
// ABOUTME: Builds prompts, invokes the provider, validates and post-processes the output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};

use crate::config::ModelConfig;
use crate::errors::AppResult;
use crate::llm::{GenerationRequest, LlmProvider};
use crate::models::{AnalysisKind, AnalysisRequest, ImageData, Location, SoilProfile};
use crate::normalize::{normalize, NormalizedText};
use crate::prompts::PromptBuilder;

/// How model output is cleaned up before display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Remove `*` and `,` markup
    StripMarkup,
    /// Trim surrounding whitespace only
    Trimmed,
}

impl ResponseFormat {
    /// Output treatment for each analysis kind
    #[must_use]
    pub const fn for_kind(kind: AnalysisKind) -> Self {
        match kind {
            AnalysisKind::Disease | AnalysisKind::RegionalInsight => Self::StripMarkup,
            AnalysisKind::CropSuggestion => Self::Trimmed,
        }
    }

    /// Apply this treatment to raw model text
    #[must_use]
    pub fn apply(self, raw_text: &str) -> NormalizedText {
        match self {
            Self::StripMarkup => normalize(raw_text),
            Self::Trimmed => NormalizedText::from_trusted(raw_text.trim().to_owned()),
        }
    }
}

/// Result of the combined disease flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseReport {
    /// Diagnosis of the uploaded image
    pub disease_analysis: NormalizedText,
    /// Diseases common in the farmer's region
    pub regional_insights: NormalizedText,
}

/// Runs analysis requests against a model provider
///
/// Holds only immutable state and is shared across handlers behind an `Arc`.
pub struct AnalysisService {
    provider: Arc<dyn LlmProvider>,
    prompts: PromptBuilder,
}

impl AnalysisService {
    /// Create a service around `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: &ModelConfig) -> Self {
        Self {
            provider,
            prompts: PromptBuilder::new(config.language_scope),
        }
    }

    /// Underlying provider
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Diagnose the plant in `image`
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or yields no usable text.
    pub async fn detect_disease(
        &self,
        image: ImageData,
        language: &str,
        location: &Location,
    ) -> AppResult<NormalizedText> {
        self.run(AnalysisRequest::Disease {
            image,
            language: language.to_owned(),
            location: location.clone(),
        })
        .await
    }

    /// Describe diseases common around `location`
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or yields no usable text.
    pub async fn regional_insights(
        &self,
        location: &Location,
        language: &str,
    ) -> AppResult<NormalizedText> {
        self.run(AnalysisRequest::RegionalInsight {
            location: location.clone(),
            language: language.to_owned(),
        })
        .await
    }

    /// Suggest crops for `soil`
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or yields no usable text.
    pub async fn crop_suggestions(
        &self,
        soil: &SoilProfile,
        language: &str,
    ) -> AppResult<NormalizedText> {
        self.run(AnalysisRequest::CropSuggestion {
            soil: soil.clone(),
            language: language.to_owned(),
        })
        .await
    }

    /// Diagnose the image, then fetch regional insight for the same location
    ///
    /// The regional call is only issued once the diagnosis succeeded, and no
    /// partial report is ever returned.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by either call.
    pub async fn disease_and_regional(
        &self,
        image: ImageData,
        language: &str,
        location: &Location,
    ) -> AppResult<DiseaseReport> {
        let disease_analysis = self.detect_disease(image, language, location).await?;
        let regional_insights = self.regional_insights(location, language).await?;
        Ok(DiseaseReport {
            disease_analysis,
            regional_insights,
        })
    }

    /// Run one analysis request
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails or yields no usable text.
    #[instrument(
        skip(self, request),
        fields(kind = request.kind().as_str(), model = self.provider.model())
    )]
    pub async fn run(&self, request: AnalysisRequest) -> AppResult<NormalizedText> {
        let kind = request.kind();
        let prompt = request.prompt(&self.prompts);
        let prompt_len = prompt.as_str().len();
        let generation = match request {
            AnalysisRequest::Disease { image, .. } => GenerationRequest::with_image(prompt, image),
            AnalysisRequest::RegionalInsight { .. } | AnalysisRequest::CropSuggestion { .. } => {
                GenerationRequest::text(prompt)
            }
        };

        let started = Instant::now();
        let text = self.provider.generate(&generation).await?.into_text()?;

        info!(
            prompt_len,
            response_len = text.len(),
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Analysis completed"
        );

        Ok(ResponseFormat::for_kind(kind).apply(&text))
    }
}

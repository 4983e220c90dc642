// ABOUTME: Google Gemini provider for leaf image diagnosis and advisory text generation
// ABOUTME: Sends one prompt plus an optional inline image to the generateContent endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini models.
//!
//! Every request carries the configured `generationConfig` and one
//! `safetySettings` entry per harm category. Images travel as base64
//! `inlineData` parts after the prompt text.
//!
//! ## Configuration
//!
//! The API key comes from `GOOGLE_API_KEY` (or `GEMINI_API_KEY`) through
//! [`ModelConfig`]. A provider without a key can be built, and fails each
//! call with `ConfigMissing`.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{FinishReason, GenerationRequest, LlmProvider, ModelResponse, TokenUsage};
use crate::config::{GenerationSettings, ModelConfig, HARM_CATEGORIES};
use crate::constants::env_keys;
use crate::errors::{AppError, ErrorCode};
use crate::models::ImageData;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

/// Content structure for Gemini API requests
#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<ContentPart>,
}

/// Part of request content (text or inline image)
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContentPart {
    /// Text content
    Text { text: String },
    /// Base64 image payload
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Inline binary payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationSettings> for GenerationConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_p: settings.top_p,
            top_k: settings.top_k,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

/// One harm category threshold
#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Candidate content; parts without text are ignored
#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Prompt-level feedback, present when the prompt was rejected
#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    config: ModelConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider from model configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ModelConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Point the provider at a different API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.config.api_key.as_deref().ok_or_else(|| {
            AppError::config_missing(format!(
                "{} environment variable not set",
                env_keys::GOOGLE_API_KEY
            ))
        })
    }

    /// Build the API URL for a model and method; the key travels in a header
    fn build_url(&self, method: &str) -> String {
        format!("{}/models/{}:{method}", self.config.base_url, self.config.model)
    }

    fn build_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let mut parts = vec![ContentPart::Text {
            text: request.prompt.as_str().to_owned(),
        }];
        if let Some(image) = &request.image {
            parts.push(Self::image_part(image));
        }

        let threshold = self.config.safety_threshold.as_str();
        GeminiRequest {
            contents: vec![GeminiContent { parts }],
            generation_config: GenerationConfig::from(&self.config.generation),
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold,
                })
                .collect(),
        }
    }

    fn image_part(image: &ImageData) -> ContentPart {
        ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: STANDARD.encode(&image.data),
            },
        }
    }

    fn into_model_response(&self, response: GeminiResponse) -> ModelResponse {
        let candidate = response.candidates.and_then(|c| c.into_iter().next());
        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .map(FinishReason::from_wire);
        let text = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        ModelResponse {
            text,
            model: self.config.model.clone(),
            finish_reason,
            block_reason: response.prompt_feedback.and_then(|f| f.block_reason),
            usage: response.usage_metadata.as_ref().map(Self::convert_usage),
        }
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Request URLs never reach error messages
    fn map_transport_error(error: reqwest::Error) -> AppError {
        AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("Gemini request failed: {}", error.without_url()),
        )
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) errors, returns a user-friendly message
    /// built from the retry hint Gemini sends.
    fn map_api_error(status: StatusCode, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            StatusCode::TOO_MANY_REQUESTS => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("Gemini rejected the API key ({}): {message}", status.as_u16()),
            ),
            _ => AppError::external_service(
                "Gemini",
                format!("API error ({}): {message}", status.as_u16()),
            ),
        }
    }

    /// Extract a user-friendly quota message from a Gemini error
    ///
    /// Gemini phrases the hint as "Please retry in 6.406453963s."
    fn extract_quota_message(message: &str) -> String {
        const RETRY_PREFIX: &str = "Please retry in ";

        let seconds = message
            .find(RETRY_PREFIX)
            .map(|pos| &message[pos + RETRY_PREFIX.len()..])
            .and_then(|rest| rest.split_once('s'))
            .and_then(|(value, _)| value.parse::<f64>().ok());

        match seconds {
            Some(seconds) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let seconds_int = seconds.ceil() as u64;
                format!("AI service quota exceeded. Please try again in {seconds_int} seconds.")
            }
            None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(
        skip(self, request),
        fields(
            model = %self.config.model,
            kind = request.prompt.kind().as_str(),
            has_image = request.image.is_some()
        )
    )]
    async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse, AppError> {
        let api_key = self.api_key()?;
        let url = self.build_url("generateContent");
        let gemini_request = self.build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(Self::map_transport_error)?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status, &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service("Gemini", format!("Failed to parse response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service("Gemini", error.message));
        }

        let model_response = self.into_model_response(gemini_response);
        if model_response.block_reason.is_some() {
            warn!(block_reason = ?model_response.block_reason, "Gemini blocked the prompt");
        }

        debug!(
            finish_reason = ?model_response.finish_reason,
            usage = ?model_response.usage,
            "Received Gemini response"
        );

        Ok(model_response)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        let api_key = self.api_key()?;
        // Listing models verifies both reachability and the key
        let url = format!("{}/models", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

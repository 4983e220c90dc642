// ABOUTME: LLM provider abstraction for the plant health and crop advisory prompts
// ABOUTME: Defines the generation contract, the response envelope and its validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! # LLM Provider Interface
//!
//! The service depends on a provider only through [`LlmProvider`]. Each call
//! carries one prompt and at most one image; there is no conversation state.
//!
//! Provider output is untrusted. [`ModelResponse::into_text`] turns a raw
//! response into usable text or a typed error:
//!
//! - a prompt block or a safety-type finish reason is
//!   [`ErrorCode::ExternalContentBlocked`](crate::errors::ErrorCode)
//! - no candidate text, or whitespace only, is an external service error
//! - `MAX_TOKENS` output is kept and logged as truncated

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AppError, ErrorCode};
use crate::models::ImageData;
use crate::prompts::PromptText;

// ============================================================================
// Request/Response Types
// ============================================================================

/// One model invocation: a prompt and an optional image
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Instruction text
    pub prompt: PromptText,
    /// Image sent alongside the prompt
    pub image: Option<ImageData>,
}

impl GenerationRequest {
    /// Text-only request
    #[must_use]
    pub const fn text(prompt: PromptText) -> Self {
        Self {
            prompt,
            image: None,
        }
    }

    /// Request with an attached image
    #[must_use]
    pub const fn with_image(prompt: PromptText, image: ImageData) -> Self {
        Self {
            prompt,
            image: Some(image),
        }
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Natural end of output
    Stop,
    /// Output budget exhausted; text is truncated
    MaxTokens,
    /// Safety filters triggered
    Safety,
    /// Output matched protected material
    Recitation,
    /// Output hit a blocklist term
    Blocklist,
    /// Output contained prohibited content
    ProhibitedContent,
    /// Output contained sensitive personal information
    Spii,
    /// Anything else the provider reports
    Other(String),
}

impl FinishReason {
    /// Parse a provider finish reason string
    #[must_use]
    pub fn from_wire(reason: &str) -> Self {
        match reason {
            "STOP" => Self::Stop,
            "MAX_TOKENS" => Self::MaxTokens,
            "SAFETY" => Self::Safety,
            "RECITATION" => Self::Recitation,
            "BLOCKLIST" => Self::Blocklist,
            "PROHIBITED_CONTENT" => Self::ProhibitedContent,
            "SPII" => Self::Spii,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether the provider withheld the output
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(
            self,
            Self::Safety | Self::Recitation | Self::Blocklist | Self::ProhibitedContent | Self::Spii
        )
    }

    /// Wire name of the reason
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stop => "STOP",
            Self::MaxTokens => "MAX_TOKENS",
            Self::Safety => "SAFETY",
            Self::Recitation => "RECITATION",
            Self::Blocklist => "BLOCKLIST",
            Self::ProhibitedContent => "PROHIBITED_CONTENT",
            Self::Spii => "SPII",
            Self::Other(other) => other,
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Raw provider output, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    /// Concatenated candidate text parts
    pub text: String,
    /// Model used for generation
    pub model: String,
    /// Finish reason of the first candidate
    pub finish_reason: Option<FinishReason>,
    /// Prompt-level block reason, when the prompt itself was rejected
    pub block_reason: Option<String>,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
}

impl ModelResponse {
    /// Successful plain-text response, mainly for test doubles
    #[must_use]
    pub fn completed(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            finish_reason: Some(FinishReason::Stop),
            block_reason: None,
            usage: None,
        }
    }

    /// Validate the response and return its text
    ///
    /// # Errors
    ///
    /// Returns `ExternalContentBlocked` for blocked prompts or outputs and
    /// `ExternalServiceError` for empty output.
    pub fn into_text(self) -> Result<String, AppError> {
        if let Some(reason) = self.block_reason {
            return Err(AppError::content_blocked(reason));
        }

        if let Some(reason) = self.finish_reason.as_ref().filter(|r| r.is_blocked()) {
            return Err(AppError::content_blocked(reason.as_str()));
        }

        if self.text.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ExternalServiceError,
                format!("Model {} returned an empty response", self.model),
            ));
        }

        if self.finish_reason == Some(FinishReason::MaxTokens) {
            warn!(model = %self.model, "Model output truncated at token limit");
        }

        Ok(self.text)
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Generative model provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Model used for every call
    fn model(&self) -> &str;

    /// Run one generation
    async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse, AppError>;

    /// Check if the provider is reachable and the API key is valid
    async fn health_check(&self) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str, finish: Option<FinishReason>) -> ModelResponse {
        ModelResponse {
            text: text.to_owned(),
            model: "gemini-1.5-flash".to_owned(),
            finish_reason: finish,
            block_reason: None,
            usage: None,
        }
    }

    #[test]
    fn test_completed_response_yields_text() {
        let text = response("Leaf blight", Some(FinishReason::Stop)).into_text();
        assert_eq!(text.ok().as_deref(), Some("Leaf blight"));
    }

    #[test]
    fn test_truncated_response_is_kept() {
        let text = response("Leaf bl", Some(FinishReason::MaxTokens)).into_text();
        assert_eq!(text.ok().as_deref(), Some("Leaf bl"));
    }

    #[test]
    fn test_safety_finish_is_blocked() {
        let error = response("partial", Some(FinishReason::Safety))
            .into_text()
            .err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ExternalContentBlocked));
    }

    #[test]
    fn test_prompt_block_reason_wins() {
        let mut blocked = response("", None);
        blocked.block_reason = Some("OTHER".to_owned());
        let error = blocked.into_text().err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ExternalContentBlocked));
    }

    #[test]
    fn test_blank_response_is_an_error() {
        let error = response("  \n ", Some(FinishReason::Stop)).into_text().err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ExternalServiceError));
    }

    #[test]
    fn test_finish_reason_wire_names() {
        assert_eq!(FinishReason::from_wire("RECITATION"), FinishReason::Recitation);
        assert_eq!(
            FinishReason::from_wire("LANGUAGE"),
            FinishReason::Other("LANGUAGE".to_owned())
        );
        assert_eq!(FinishReason::from_wire("SPII").as_str(), "SPII");
    }
}

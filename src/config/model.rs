// ABOUTME: Model client configuration covering credentials, generation and safety settings
// ABOUTME: Built once at startup, read-only afterwards, constructed directly in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{defaults, env_keys};
use crate::errors::AppError;
use crate::prompts::LanguageDirectiveScope;

/// Sampling parameters sent as `generationConfig`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling probability
    pub top_p: f32,
    /// Top-k sampling
    pub top_k: u32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: defaults::TEMPERATURE,
            top_p: defaults::TOP_P,
            top_k: defaults::TOP_K,
            max_output_tokens: defaults::MAX_OUTPUT_TOKENS,
        }
    }
}

/// Harm categories the safety threshold is applied to
pub const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Block threshold for every harm category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyThreshold {
    /// Block nothing
    BlockNone,
    /// Block only high-probability harm
    BlockOnlyHigh,
    /// Block medium and high
    #[default]
    BlockMediumAndAbove,
    /// Block low, medium and high
    BlockLowAndAbove,
}

impl SafetyThreshold {
    /// Wire name of the threshold
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlockNone => "BLOCK_NONE",
            Self::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
            Self::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            Self::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
        }
    }
}

impl FromStr for SafetyThreshold {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLOCK_NONE" => Ok(Self::BlockNone),
            "BLOCK_ONLY_HIGH" => Ok(Self::BlockOnlyHigh),
            "BLOCK_MEDIUM_AND_ABOVE" => Ok(Self::BlockMediumAndAbove),
            "BLOCK_LOW_AND_ABOVE" => Ok(Self::BlockLowAndAbove),
            other => Err(AppError::config(format!("Unknown safety threshold '{other}'"))),
        }
    }
}

impl fmt::Display for SafetyThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the model client and prompt builder need
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    /// Provider API key; calls fail when absent
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Sampling parameters
    pub generation: GenerationSettings,
    /// Safety threshold
    pub safety_threshold: SafetyThreshold,
    /// HTTP client timeout
    pub request_timeout: Duration,
    /// Which prompts receive the language directive
    pub language_scope: LanguageDirectiveScope,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::GEMINI_MODEL.to_owned(),
            base_url: defaults::GEMINI_BASE_URL.to_owned(),
            generation: GenerationSettings::default(),
            safety_threshold: SafetyThreshold::default(),
            request_timeout: Duration::from_secs(defaults::MODEL_REQUEST_TIMEOUT_SECS),
            language_scope: LanguageDirectiveScope::default(),
        }
    }
}

impl ModelConfig {
    /// Load model configuration from environment variables
    ///
    /// A missing API key is not an error here; model calls fail instead.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(env_keys::GOOGLE_API_KEY)
            .or_else(|_| env::var(env_keys::GEMINI_API_KEY))
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            api_key,
            model: env_var_or(env_keys::GEMINI_MODEL, defaults::GEMINI_MODEL),
            base_url: env_var_or(env_keys::GEMINI_BASE_URL, defaults::GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            generation: GenerationSettings {
                temperature: parse_env(env_keys::MODEL_TEMPERATURE, defaults::TEMPERATURE)?,
                top_p: parse_env(env_keys::MODEL_TOP_P, defaults::TOP_P)?,
                top_k: parse_env(env_keys::MODEL_TOP_K, defaults::TOP_K)?,
                max_output_tokens: parse_env(
                    env_keys::MODEL_MAX_OUTPUT_TOKENS,
                    defaults::MAX_OUTPUT_TOKENS,
                )?,
            },
            safety_threshold: env::var(env_keys::MODEL_SAFETY_THRESHOLD)
                .ok()
                .map(|value| value.parse::<SafetyThreshold>())
                .transpose()
                .map_err(anyhow::Error::new)
                .context("Invalid MODEL_SAFETY_THRESHOLD value")?
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(parse_env(
                env_keys::MODEL_REQUEST_TIMEOUT_SECS,
                defaults::MODEL_REQUEST_TIMEOUT_SECS,
            )?),
            language_scope: env::var(env_keys::PROMPT_LANGUAGE_SCOPE)
                .ok()
                .map(|value| value.parse::<LanguageDirectiveScope>())
                .transpose()
                .map_err(anyhow::Error::new)
                .context("Invalid PROMPT_LANGUAGE_SCOPE value")?
                .unwrap_or_default(),
        })
    }

    /// Whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("generation", &self.generation)
            .field("safety_threshold", &self.safety_threshold)
            .field("request_timeout", &self.request_timeout)
            .field("language_scope", &self.language_scope)
            .finish()
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse environment variable, falling back to `default` when unset
pub(crate) fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: '{value}'")),
        Err(_) => Ok(default),
    }
}

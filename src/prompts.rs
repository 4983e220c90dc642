// ABOUTME: Prompt templates for disease analysis, regional insight and crop suggestion requests
// ABOUTME: Pure string interpolation with an explicit, configurable language directive scope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! # Prompt Builder
//!
//! One template per request kind. Building a prompt never fails: field values
//! are interpolated verbatim, so empty strings yield a degraded but valid
//! instruction. Presence checks are the caller's job.
//!
//! Only the disease template carries a language directive by default. The
//! [`LanguageDirectiveScope`] turns that into a configuration choice instead of
//! an accident of which template happens to include it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{AnalysisKind, Location, SoilProfile};

/// Instruction text sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText {
    kind: AnalysisKind,
    text: String,
}

impl PromptText {
    fn new(kind: AnalysisKind, text: String) -> Self {
        Self { kind, text }
    }

    /// Template kind this prompt was built from
    #[must_use]
    pub const fn kind(&self) -> AnalysisKind {
        self.kind
    }

    /// Prompt text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn with_language_directive(self, language: &str) -> Self {
        Self {
            kind: self.kind,
            text: language_directive(language, &self.text),
        }
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn language_directive(language: &str, prompt: &str) -> String {
    format!("Provide the following response in {language}: {prompt}")
}

/// Disease analysis prompt for an uploaded plant image
#[must_use]
pub fn build_disease_prompt(language: &str, area: &str, district: &str, state: &str) -> PromptText {
    let body = format!(
        "As a highly skilled plant pathologist, analyze this plant image for a farmer in {area}, {district}, {state}. Please provide:\n\
         1. Disease identification (if any)\n\
         2. Severity assessment\n\
         3. Treatment recommendations\n\
         4. Regional context: Is this disease common in {district}? What factors in this region might affect its spread?\n\
         5. Preventive measures specific to this geographical area\n\
         \n\
         Consider local climate patterns and common agricultural practices in {state} when making recommendations.\n\
         Please be concise and practical in your response.\n"
    );
    PromptText::new(AnalysisKind::Disease, language_directive(language, &body))
}

/// Regional disease prevalence prompt; carries no language directive
#[must_use]
pub fn build_regional_insight_prompt(area: &str, district: &str, state: &str) -> PromptText {
    let text = format!(
        "As an agricultural expert, provide insights about plant diseases in {area}, {district}, {state}:\n\
         1. What are the most common plant diseases in this region?\n\
         2. Which seasons are these diseases most prevalent?\n\
         3. What are the unique environmental factors in {district} that affect plant health?\n\
         4. What preventive measures do you recommend for farmers in this specific area?\n\
         \n\
         Provide a concise, practical response focusing on local relevance.\n"
    );
    PromptText::new(AnalysisKind::RegionalInsight, text)
}

/// Crop suggestion prompt for a soil profile; carries no language directive
#[must_use]
pub fn build_crop_suggestion_prompt(
    soil_type: &str,
    ph_level: &str,
    nutrients: &str,
    texture: &str,
    location: &str,
) -> PromptText {
    let text = format!(
        "As an expert agricultural advisor, based on the following details:\n\
         - Soil Type: {soil_type}\n\
         - pH Level: {ph_level}\n\
         - Nutrient Content: {nutrients}\n\
         - Soil Texture: {texture}\n\
         - Location: {location}\n\
         \n\
         Suggest the best crops that can be planted in this region and soil type.\n\
         Provide reasons for your suggestions, including compatibility with soil, climate, and market demand.\n\
         Your response should be concise and farmer-friendly.\n"
    );
    PromptText::new(AnalysisKind::CropSuggestion, text)
}

/// Which prompt kinds receive the language directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageDirectiveScope {
    /// Only the disease prompt (observed behaviour)
    #[default]
    DiseaseOnly,
    /// Every prompt kind
    AllPrompts,
}

impl LanguageDirectiveScope {
    /// Whether prompts of `kind` get the directive
    #[must_use]
    pub const fn applies_to(self, kind: AnalysisKind) -> bool {
        match self {
            Self::DiseaseOnly => matches!(kind, AnalysisKind::Disease),
            Self::AllPrompts => true,
        }
    }
}

impl FromStr for LanguageDirectiveScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disease" | "disease_only" => Ok(Self::DiseaseOnly),
            "all" | "all_prompts" => Ok(Self::AllPrompts),
            other => Err(AppError::config(format!(
                "Unknown prompt language scope '{other}' (expected 'disease' or 'all')"
            ))),
        }
    }
}

impl fmt::Display for LanguageDirectiveScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiseaseOnly => f.write_str("disease"),
            Self::AllPrompts => f.write_str("all"),
        }
    }
}

/// Builds prompts from domain values under a fixed directive scope
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    scope: LanguageDirectiveScope,
}

impl PromptBuilder {
    /// Create a builder for `scope`
    #[must_use]
    pub const fn new(scope: LanguageDirectiveScope) -> Self {
        Self { scope }
    }

    /// Disease analysis prompt
    #[must_use]
    pub fn disease(&self, language: &str, location: &Location) -> PromptText {
        build_disease_prompt(
            language,
            &location.area,
            &location.district,
            &location.state,
        )
    }

    /// Regional insight prompt, localized only under [`LanguageDirectiveScope::AllPrompts`]
    #[must_use]
    pub fn regional_insight(&self, location: &Location, language: &str) -> PromptText {
        let prompt =
            build_regional_insight_prompt(&location.area, &location.district, &location.state);
        self.localize(prompt, language)
    }

    /// Crop suggestion prompt, localized only under [`LanguageDirectiveScope::AllPrompts`]
    #[must_use]
    pub fn crop_suggestion(&self, soil: &SoilProfile, language: &str) -> PromptText {
        let prompt = build_crop_suggestion_prompt(
            &soil.soil_type,
            &soil.ph_level,
            &soil.nutrients,
            &soil.texture,
            &soil.location,
        );
        self.localize(prompt, language)
    }

    fn localize(&self, prompt: PromptText, language: &str) -> PromptText {
        if self.scope.applies_to(prompt.kind()) {
            prompt.with_language_directive(language)
        } else {
            prompt
        }
    }
}

// ABOUTME: Tests for the analysis service flows against a scripted provider
// ABOUTME: Checks dispatch by request kind, output treatment and the sequential combined flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use std::sync::Arc;

use agri_assist::config::ModelConfig;
use agri_assist::errors::ErrorCode;
use agri_assist::models::{AnalysisKind, AnalysisRequest, ImageData, Location, SoilProfile};
use agri_assist::prompts::LanguageDirectiveScope;
use agri_assist::services::AnalysisService;
use helpers::scripted_provider::ScriptedProvider;

fn location() -> Location {
    Location::new("Kuttanad", "Alappuzha", "Kerala")
}

fn image() -> ImageData {
    ImageData::new(b"leaf".to_vec(), Some("image/webp"))
}

#[tokio::test]
async fn test_run_dispatches_by_kind() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .with_text("**Rust**, early")
            .with_text(" **Millet** "),
    );
    let service = AnalysisService::new(provider.clone(), &ModelConfig::default());

    let regional = service
        .run(AnalysisRequest::RegionalInsight {
            location: location(),
            language: "Telugu".to_owned(),
        })
        .await
        .unwrap();
    let crops = service
        .run(AnalysisRequest::CropSuggestion {
            soil: SoilProfile::default(),
            language: "Telugu".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(regional.as_str(), "Rust early");
    assert_eq!(crops.as_str(), "**Millet**");

    let calls = provider.calls();
    assert_eq!(calls[0].kind, AnalysisKind::RegionalInsight);
    assert_eq!(calls[1].kind, AnalysisKind::CropSuggestion);
    assert!(calls.iter().all(|c| !c.prompt.contains("Telugu")));
}

#[tokio::test]
async fn test_all_prompts_scope_localizes_regional_prompt() {
    let provider = Arc::new(ScriptedProvider::new().with_text("Blast"));
    let config = ModelConfig {
        language_scope: LanguageDirectiveScope::AllPrompts,
        ..ModelConfig::default()
    };
    let service = AnalysisService::new(provider.clone(), &config);

    service.regional_insights(&location(), "Tamil").await.unwrap();

    assert!(provider.calls()[0]
        .prompt
        .starts_with("Provide the following response in Tamil: "));
}

#[tokio::test]
async fn test_combined_flow_is_sequential() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .with_text("Leaf spot")
            .with_text("Blight is common"),
    );
    let service = AnalysisService::new(provider.clone(), &ModelConfig::default());

    let report = service
        .disease_and_regional(image(), "English", &location())
        .await
        .unwrap();

    assert_eq!(report.disease_analysis.as_str(), "Leaf spot");
    assert_eq!(report.regional_insights.as_str(), "Blight is common");
    let calls = provider.calls();
    assert_eq!(calls[0].kind, AnalysisKind::Disease);
    assert_eq!(calls[0].image_mime_type.as_deref(), Some("image/webp"));
    assert_eq!(calls[1].kind, AnalysisKind::RegionalInsight);
}

#[tokio::test]
async fn test_combined_flow_stops_after_first_failure() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .with_error(ErrorCode::ExternalAuthFailed, "key rejected")
            .with_text("never requested"),
    );
    let service = AnalysisService::new(provider.clone(), &ModelConfig::default());

    let error = service
        .disease_and_regional(image(), "English", &location())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
    assert_eq!(provider.calls().len(), 1);
}

// ABOUTME: Integration tests for the crop recommendation API route
// ABOUTME: Covers required field order, body shape checks and output handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use std::sync::Arc;

use agri_assist::errors::ErrorCode;
use agri_assist::models::AnalysisKind;
use agri_assist::prompts::LanguageDirectiveScope;
use helpers::axum_test::AxumTestRequest;
use helpers::scripted_provider::ScriptedProvider;
use helpers::{test_app, test_config};
use serde_json::{json, Value};

fn soil() -> Value {
    json!({
        "soil_type": "Loamy",
        "ph_level": "6.5",
        "nutrients": "High N, Low P",
        "texture": "60% sand, 30% silt",
        "location": "Kerala, India"
    })
}

#[tokio::test]
async fn test_missing_location_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new());
    let app = test_app(provider.clone(), test_config(uploads.path()));

    let mut body = soil();
    body.as_object_mut().unwrap().remove("location");
    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&body)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Missing location"}));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_first_missing_field_is_reported() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new());
    let app = test_app(provider, test_config(uploads.path()));

    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&json!({"texture": "fine", "nutrients": "low"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing soil_type");
}

#[tokio::test]
async fn test_non_object_bodies_are_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new());

    for (content_type, raw) in [
        ("application/json", "[1, 2, 3]".as_bytes()),
        ("application/json", b"{not json".as_slice()),
        ("text/plain", b"soil_type=clay".as_slice()),
    ] {
        let app = test_app(provider.clone(), test_config(uploads.path()));
        let response = AxumTestRequest::post("/api/crop-recommendation")
            .raw(content_type, raw)
            .send(app)
            .await;

        assert_eq!(response.status(), 400);
        let body: Value = response.json();
        assert_eq!(body["error"], "Request body must be a JSON object");
    }
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_oversized_body_is_json_error() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path());
    config.uploads.max_bytes = 64;
    let provider = Arc::new(ScriptedProvider::new());
    let app = test_app(provider.clone(), config);

    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&json!({
            "soil_type": "Loamy",
            "ph_level": "6.5",
            "nutrients": "High nitrogen, moderate phosphorus, low potassium",
            "texture": "Sandy loam",
            "location": "Alappuzha, Kerala"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 413);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_recommendations_are_trimmed_not_normalized() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new().with_text("\n**Rice**, Coconut\n\n"));
    let app = test_app(provider.clone(), test_config(uploads.path()));

    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&soil())
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["recommendations"], "**Rice**, Coconut");

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, AnalysisKind::CropSuggestion);
    assert!(calls[0].image_mime_type.is_none());
    for value in ["Loamy", "6.5", "High N, Low P", "60% sand, 30% silt", "Kerala, India"] {
        assert!(calls[0].prompt.contains(value), "prompt missing {value}");
    }
    assert!(!calls[0].prompt.contains("Provide the following response in"));
}

#[tokio::test]
async fn test_all_prompts_scope_localizes_crop_prompt() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path());
    config.model.language_scope = LanguageDirectiveScope::AllPrompts;
    let provider = Arc::new(ScriptedProvider::new().with_text("Rice"));
    let app = test_app(provider.clone(), config);

    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&soil())
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert!(provider.calls()[0]
        .prompt
        .starts_with("Provide the following response in English: "));
}

#[tokio::test]
async fn test_numeric_values_are_accepted() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new().with_text("Rice"));
    let app = test_app(provider.clone(), test_config(uploads.path()));

    let mut body = soil();
    body["ph_level"] = json!(6.5);
    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&body)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert!(provider.calls()[0].prompt.contains("pH Level: 6.5"));
}

#[tokio::test]
async fn test_model_failure_is_server_error() {
    let uploads = tempfile::tempdir().unwrap();
    let provider = Arc::new(ScriptedProvider::new().with_error(
        ErrorCode::ConfigMissing,
        "GOOGLE_API_KEY environment variable not set",
    ));
    let app = test_app(provider, test_config(uploads.path()));

    let response = AxumTestRequest::post("/api/crop-recommendation")
        .json(&soil())
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "GOOGLE_API_KEY environment variable not set");
}

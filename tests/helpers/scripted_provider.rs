// ABOUTME: Scripted LLM provider test double returning queued replies
// ABOUTME: Records every generation request so tests can inspect prompts and images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use std::collections::VecDeque;
use std::sync::Mutex;

use agri_assist::errors::{AppError, ErrorCode};
use agri_assist::llm::{GenerationRequest, LlmProvider, ModelResponse};
use agri_assist::models::AnalysisKind;
use async_trait::async_trait;

/// Model name reported by the scripted provider
pub const SCRIPTED_MODEL: &str = "scripted-model";

/// One queued reply
pub enum Reply {
    /// Successful text
    Text(String),
    /// Full response envelope
    Response(ModelResponse),
    /// Provider failure
    Error(ErrorCode, String),
}

/// What the provider was asked
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: AnalysisKind,
    pub prompt: String,
    pub image_mime_type: Option<String>,
    pub image_len: usize,
}

/// Provider answering from a fixed script, in order
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    /// Provider with no replies; every call fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful text reply
    pub fn with_text(self, text: &str) -> Self {
        self.push(Reply::Text(text.to_owned()))
    }

    /// Queue a full response envelope
    pub fn with_response(self, response: ModelResponse) -> Self {
        self.push(Reply::Response(response))
    }

    /// Queue a failure
    pub fn with_error(self, code: ErrorCode, message: &str) -> Self {
        self.push(Reply::Error(code, message.to_owned()))
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Calls made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn model(&self) -> &str {
        SCRIPTED_MODEL
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<ModelResponse, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            kind: request.prompt.kind(),
            prompt: request.prompt.as_str().to_owned(),
            image_mime_type: request.image.as_ref().map(|i| i.mime_type.clone()),
            image_len: request.image.as_ref().map_or(0, |i| i.data.len()),
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(ModelResponse::completed(text, SCRIPTED_MODEL)),
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Error(code, message)) => Err(AppError::new(code, message)),
            None => Err(AppError::internal("no scripted reply left")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

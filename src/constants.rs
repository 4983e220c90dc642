// ABOUTME: Application constants for environment keys, defaults, and user-facing messages
// ABOUTME: Centralizes every literal shared between configuration, routes and the interactive UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Application constants grouped by concern

/// Service identity used in logs and the health endpoint
pub mod service_names {
    /// Service name
    pub const AGRI_ASSIST_SERVER: &str = "agri-assist-server";
}

/// Environment variable names
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Primary API key variable for the model provider
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    /// Fallback API key variable for the model provider
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Model name override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// API base URL override
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Sampling temperature
    pub const MODEL_TEMPERATURE: &str = "MODEL_TEMPERATURE";
    /// Nucleus sampling
    pub const MODEL_TOP_P: &str = "MODEL_TOP_P";
    /// Top-k sampling
    pub const MODEL_TOP_K: &str = "MODEL_TOP_K";
    /// Output token budget
    pub const MODEL_MAX_OUTPUT_TOKENS: &str = "MODEL_MAX_OUTPUT_TOKENS";
    /// Harm block threshold applied to every category
    pub const MODEL_SAFETY_THRESHOLD: &str = "MODEL_SAFETY_THRESHOLD";
    /// HTTP client timeout for model calls
    pub const MODEL_REQUEST_TIMEOUT_SECS: &str = "MODEL_REQUEST_TIMEOUT_SECS";
    /// Which prompts receive the language directive
    pub const PROMPT_LANGUAGE_SCOPE: &str = "PROMPT_LANGUAGE_SCOPE";
    /// Directory for temporary uploads
    pub const UPLOAD_DIR: &str = "UPLOAD_DIR";
    /// Upload body limit
    pub const MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Bind port
    pub const HTTP_PORT: u16 = 5000;
    /// Model used when `GEMINI_MODEL` is unset
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    /// Generative Language API base URL
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Sampling temperature
    pub const TEMPERATURE: f32 = 0.4;
    /// Nucleus sampling
    pub const TOP_P: f32 = 1.0;
    /// Top-k sampling
    pub const TOP_K: u32 = 32;
    /// Output token budget
    pub const MAX_OUTPUT_TOKENS: u32 = 4096;
    /// Model call timeout in seconds
    pub const MODEL_REQUEST_TIMEOUT_SECS: u64 = 120;
    /// Upload body limit (10 MiB)
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
    /// Allow every origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Language used when a form omits it
    pub const LANGUAGE: &str = "English";
    /// MIME type assumed for uploads that do not declare an image type
    pub const IMAGE_MIME_TYPE: &str = "image/jpeg";
}

/// Request field names shared by the API routes
pub mod fields {
    /// Uploaded image part
    pub const IMAGE: &str = "image";
    /// Output language
    pub const LANGUAGE: &str = "language";
    /// Area or village
    pub const AREA: &str = "area";
    /// District
    pub const DISTRICT: &str = "district";
    /// State
    pub const STATE: &str = "state";
    /// Required crop recommendation fields, in validation order
    pub const CROP_REQUIRED: [&str; 5] =
        ["soil_type", "ph_level", "nutrients", "texture", "location"];
}

/// Fixed user-facing messages
pub mod messages {
    /// API: multipart request without an image part
    pub const NO_IMAGE_UPLOADED: &str = "No image uploaded";
    /// API: body is not a JSON object
    pub const BODY_NOT_JSON_OBJECT: &str = "Request body must be a JSON object";
    /// UI: disease tab submitted without an image
    pub const UPLOAD_IMAGE_FIRST: &str = "Please upload an image first.";
    /// UI: image present but no language chosen
    pub const MISSING_FILE_OR_LANGUAGE: &str = "Error: Missing file or language selection.";
    /// UI: location fields incomplete
    pub const MISSING_REGION: &str = "Error: Missing region information.";
}

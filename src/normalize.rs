// ABOUTME: Display cleanup for model output, stripping Markdown emphasis and stray commas
// ABOUTME: Total, deterministic and idempotent; not an HTML sanitizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Response normalization
//!
//! Removes every run of `*` and `,` characters. Everything else, whitespace and
//! newlines included, passes through in order. Callers embedding the result
//! in HTML must escape it themselves.

use std::fmt;

use serde::Serialize;

/// Characters removed from model output
const STRIPPED: [char; 2] = ['*', ','];

/// Model output after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wrap text that needs no markup stripping (already normalized or trimmed output)
    #[must_use]
    pub(crate) const fn from_trusted(text: String) -> Self {
        Self(text)
    }

    /// Normalized text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the normalized text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

/// Strip `*` and `,` from `raw_text`
#[must_use]
pub fn normalize(raw_text: &str) -> NormalizedText {
    NormalizedText(raw_text.chars().filter(|c| !STRIPPED.contains(c)).collect())
}

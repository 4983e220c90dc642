// ABOUTME: Multipart form parsing shared by the UI and API plant health endpoints
// ABOUTME: Collects the image part and text fields, and renders body rejections as JSON errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::Multipart;
use bytes::Bytes;
use http::StatusCode;

use crate::constants::{fields, messages};
use crate::errors::{AppError, ErrorCode};
use crate::models::Location;

/// Uploaded image part
#[derive(Debug, Clone)]
pub(crate) struct ImagePart {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Fields of a plant health submission
///
/// Text fields are `None` when the part was absent and kept verbatim otherwise.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlantHealthForm {
    pub image: Option<ImagePart>,
    pub language: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
}

impl PlantHealthForm {
    /// Drain a multipart body; unknown parts are skipped
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                fields::IMAGE => form.image = ImagePart::read(field).await?,
                fields::LANGUAGE => form.language = Some(text(field).await?),
                fields::AREA => form.area = Some(text(field).await?),
                fields::DISTRICT => form.district = Some(text(field).await?),
                fields::STATE => form.state = Some(text(field).await?),
                _ => {}
            }
        }

        Ok(form)
    }

    /// Submitted location, missing parts empty
    pub fn location(&self) -> Location {
        Location::new(
            self.area.clone().unwrap_or_default(),
            self.district.clone().unwrap_or_default(),
            self.state.clone().unwrap_or_default(),
        )
    }
}

impl ImagePart {
    /// Read an image part; a browser file input left empty yields `None`
    async fn read(field: Field<'_>) -> Result<Option<Self>, AppError> {
        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if file_name.is_none() && bytes.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            bytes,
            file_name,
            content_type,
        }))
    }
}

async fn text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Map a body extraction failure; oversized bodies keep their 413
pub(crate) fn rejection_error(status: StatusCode, detail: String, message: &str) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::new(ErrorCode::PayloadTooLarge, detail)
    } else {
        AppError::invalid_input(message)
    }
}

fn multipart_error(error: MultipartError) -> AppError {
    let detail = error.body_text();
    rejection_error(error.status(), detail.clone(), &detail)
}

/// A body that is not multipart has no image
pub(crate) fn missing_image(rejection: &MultipartRejection) -> AppError {
    rejection_error(
        rejection.status(),
        rejection.body_text(),
        messages::NO_IMAGE_UPLOADED,
    )
}

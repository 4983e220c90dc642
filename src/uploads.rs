// ABOUTME: Temporary storage for uploaded leaf images
// ABOUTME: Files live only as long as their guard and are read back as inline image data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Upload staging
//!
//! An upload is written to a uniquely named file in the configured directory
//! and removed when its [`TempUpload`] guard drops, on success and failure
//! alike. The client-provided filename only contributes a sanitized extension.

use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::config::UploadConfig;
use crate::errors::{AppError, AppResult};
use crate::models::ImageData;

/// Longest extension kept from a client filename
const MAX_EXTENSION_LEN: usize = 8;

/// Uploaded file on disk, deleted on drop
#[derive(Debug)]
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Write `bytes` to a new temporary file in the upload directory
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory is unusable or the write fails.
    pub fn persist(
        config: &UploadConfig,
        bytes: &[u8],
        original_file_name: Option<&str>,
    ) -> AppResult<Self> {
        let suffix = original_file_name
            .and_then(sanitized_extension)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let mut file = Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile_in(&config.directory)
            .map_err(|e| storage_error("create upload file", e))?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| storage_error("write upload file", e))?;

        debug!(path = %file.path().display(), size = bytes.len(), "Staged upload");
        Ok(Self { file })
    }

    /// Location of the staged file
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Lowercase alphanumeric extension of `file_name`, if it has a usable one
fn sanitized_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    (!ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    .then(|| ext.to_ascii_lowercase())
}

fn storage_error(action: &str, error: io::Error) -> AppError {
    AppError::storage(format!("Failed to {action}: {error}")).with_source(error)
}

/// Read an image file into inline image data
///
/// # Errors
///
/// Returns `ResourceNotFound` if nothing exists at `path` and `StorageError`
/// for any other I/O failure.
pub async fn read_image_data(path: &Path, mime_type: Option<&str>) -> AppResult<ImageData> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(ImageData::new(bytes, mime_type)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppError::not_found(format!(
            "Could not find image: {}",
            path.display()
        ))),
        Err(e) => Err(storage_error("read image", e)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> UploadConfig {
        UploadConfig {
            directory: dir.to_path_buf(),
            ..UploadConfig::default()
        }
    }

    #[test]
    fn test_extension_sanitizing() {
        assert_eq!(sanitized_extension("leaf.JPG").as_deref(), Some("jpg"));
        assert_eq!(sanitized_extension("../../etc/passwd"), None);
        assert_eq!(sanitized_extension("photo.j p g"), None);
        assert_eq!(sanitized_extension("archive.tar.gz").as_deref(), Some("gz"));
    }

    #[tokio::test]
    async fn test_upload_removed_on_drop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let upload = TempUpload::persist(&config_in(dir.path()), b"leaf", Some("leaf.png"))
            .expect("persist upload");
        let path = upload.path().to_path_buf();

        assert!(path.extension().is_some_and(|ext| ext == "png"));
        let image = read_image_data(&path, Some("image/png")).await.expect("read back");
        assert_eq!(image.data.as_ref(), b"leaf");
        assert_eq!(image.mime_type, "image/png");

        drop(upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("gone.jpg");
        let error = read_image_data(&missing, None).await.expect_err("missing file");
        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
        assert!(error.message.starts_with("Could not find image: "));
    }
}

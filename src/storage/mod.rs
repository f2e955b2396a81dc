//! Asset storage
//!
//! Uploaded round artifacts (screenshots, slides, images) are handed to an
//! external asset host which returns a publicly retrievable URL. The host is
//! abstracted behind [`AssetUploader`] so request handling never depends on
//! a particular vendor.

pub mod cloudinary;

use async_trait::async_trait;
use bytes::Bytes;

pub use cloudinary::CloudinaryUploader;

/// A file received from a client, buffered in memory
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: Option<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            data,
        }
    }

    /// Name used when logging or forwarding the file
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Errors raised by the asset host
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("asset host credentials are not configured")]
    NotConfigured,

    #[error("asset host request failed: {0}")]
    Transport(String),

    #[error("asset host rejected '{file}' with status {status}: {message}")]
    Rejected {
        file: String,
        status: u16,
        message: String,
    },

    #[error("asset host returned an unexpected response: {0}")]
    MalformedResponse(String),
}

/// Stores a single file and returns its public URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: &UploadedFile) -> Result<String, UploadError>;
}

//! Cloudinary-compatible signed upload client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{config::UploadConfig, utils::crypto::hash_string};

use super::{AssetUploader, UploadError, UploadedFile};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Uploads files with `resource_type=auto` so images, PDFs and slide decks
/// all go through the same endpoint.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    credentials: Option<Credentials>,
    folder: String,
}

struct Credentials {
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl CloudinaryUploader {
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let credentials = if config.has_credentials() {
            Some(Credentials {
                cloud_name: config.cloud_name.clone().unwrap_or_default(),
                api_key: config.api_key.clone().unwrap_or_default(),
                api_secret: config.api_secret.clone().unwrap_or_default(),
            })
        } else {
            tracing::warn!("Asset host credentials missing; uploads will be rejected");
            None
        };

        Ok(Self {
            client,
            credentials,
            folder: config.folder.clone(),
        })
    }

    fn endpoint(cloud_name: &str) -> String {
        format!("{}/{}/auto/upload", API_BASE, cloud_name)
    }
}

/// Signs request parameters: sorted `key=value` pairs joined with `&`, the
/// API secret appended, hashed with SHA-256.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    hash_string(&format!("{}{}", to_sign, api_secret))
}

#[async_trait]
impl AssetUploader for CloudinaryUploader {
    async fn upload(&self, file: &UploadedFile) -> Result<String, UploadError> {
        let creds = self.credentials.as_ref().ok_or(UploadError::NotConfigured)?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[("folder", self.folder.as_str()), ("timestamp", timestamp.as_str())],
            &creds.api_secret,
        );

        let mut part = Part::bytes(file.data.to_vec()).file_name(file.display_name().to_string());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| UploadError::Transport(e.to_string()))?;
        }

        let form = Form::new()
            .part("file", part)
            .text("api_key", creds.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.folder.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .client
            .post(Self::endpoint(&creds.cloud_name))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(UploadError::Rejected {
                file: file.display_name().to_string(),
                status: status.as_u16(),
                message: body
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "no error message".to_string()),
            });
        }

        let url = body
            .secure_url
            .ok_or_else(|| UploadError::MalformedResponse("missing secure_url".to_string()))?;

        tracing::debug!(file = %file.display_name(), bytes = file.len(), %url, "Asset uploaded");

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_order_independent() {
        let a = sign_params(&[("timestamp", "1700000000"), ("folder", "f")], "secret");
        let b = sign_params(&[("folder", "f"), ("timestamp", "1700000000")], "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_signature_skips_empty_params() {
        let with_empty = sign_params(&[("folder", ""), ("timestamp", "1")], "s");
        let without = sign_params(&[("timestamp", "1")], "s");
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let a = sign_params(&[("timestamp", "1")], "one");
        let b = sign_params(&[("timestamp", "1")], "two");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_missing_credentials_rejects_upload() {
        let uploader = CloudinaryUploader::new(&UploadConfig::default()).unwrap();
        let file = UploadedFile::new(None, None, bytes::Bytes::from_static(b"x"));
        let err = uploader.upload(&file).await.unwrap_err();
        assert!(matches!(err, UploadError::NotConfigured));
    }
}

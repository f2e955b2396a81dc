//! Upload service
//!
//! Forwards client files to the asset host one at a time. A failed upload
//! aborts the batch; files stored before the failure are left in place.

use crate::{
    error::{AppError, AppResult},
    storage::{AssetUploader, UploadedFile},
    utils::is_image_content_type,
};

/// Upload service for business logic
pub struct UploadService;

impl UploadService {
    /// Upload every file in order and collect the returned URLs
    pub async fn upload_all(
        uploader: &dyn AssetUploader,
        files: &[UploadedFile],
    ) -> AppResult<Vec<String>> {
        let mut urls = Vec::with_capacity(files.len());

        for (index, file) in files.iter().enumerate() {
            let url = uploader.upload(file).await.inspect_err(|e| {
                tracing::warn!(
                    file = %file.display_name(),
                    index,
                    already_uploaded = urls.len(),
                    error = %e,
                    "Upload failed, aborting batch"
                );
            })?;
            urls.push(url);
        }

        Ok(urls)
    }

    /// Reject the batch unless every file declares an `image/*` content type
    pub fn ensure_images(files: &[UploadedFile]) -> AppResult<()> {
        if let Some(file) = files
            .iter()
            .find(|f| !is_image_content_type(f.content_type.as_deref()))
        {
            return Err(AppError::Validation(format!(
                "Only images allowed: '{}' has content type {}",
                file.display_name(),
                file.content_type.as_deref().unwrap_or("<none>")
            )));
        }
        Ok(())
    }

    /// Standalone bulk image upload. The whole batch is checked before the
    /// first upload, so a rejected batch stores nothing.
    pub async fn upload_images(
        uploader: &dyn AssetUploader,
        files: &[UploadedFile],
    ) -> AppResult<Vec<String>> {
        if files.is_empty() {
            return Err(AppError::Validation("No files uploaded".to_string()));
        }

        Self::ensure_images(files)?;
        let urls = Self::upload_all(uploader, files).await?;

        tracing::info!(count = urls.len(), "Bulk image upload completed");

        Ok(urls)
    }
}

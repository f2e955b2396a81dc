//! Bulk upload handler implementations

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;

use crate::{
    error::AppResult, handlers::rounds::MultipartForm, services::UploadService, state::AppState,
};

/// Bulk upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub images: Vec<String>,
}

/// Upload a batch of images; nothing is stored unless every file is an image
pub async fn upload_multiple(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let form = MultipartForm::from_multipart(multipart).await?;
    let images = UploadService::upload_images(state.uploader(), &form.files).await?;

    Ok(Json(UploadResponse {
        message: "All uploads successful".to_string(),
        images,
    }))
}

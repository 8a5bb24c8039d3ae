//! Handler for cover image uploads.
//!
//! Accepts a multipart form with a `cover` file field, sniffs the image
//! format from the bytes (the client's content type is not trusted),
//! writes the file under the configured upload directory with a generated
//! name, and returns the URL it is served from.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Typed response for the cover upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub url: String,
}

/// Accepted cover formats and the extension each is stored with.
fn extension_for(format: image::ImageFormat) -> Option<&'static str> {
    match format {
        image::ImageFormat::Png => Some("png"),
        image::ImageFormat::Jpeg => Some("jpg"),
        image::ImageFormat::WebP => Some("webp"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// POST /upload/cover
// ---------------------------------------------------------------------------

/// Store an uploaded cover image and return its public URL.
pub async fn upload_cover(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("cover") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if data.is_empty() {
            return Err(AppError::BadRequest(
                "Uploaded cover file is empty".to_string(),
            ));
        }
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::BadRequest(format!(
                "Cover file exceeds the maximum size of {} bytes",
                state.config.max_upload_bytes
            )));
        }

        let format = image::guess_format(&data).map_err(|_| {
            AppError::BadRequest("Uploaded file is not a recognised image".to_string())
        })?;
        let ext = extension_for(format).ok_or_else(|| {
            AppError::BadRequest("Cover images must be PNG, JPEG, or WebP".to_string())
        })?;

        let filename = format!("{}.{ext}", uuid::Uuid::new_v4());
        let dir = std::path::Path::new(&state.config.upload_dir);
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store cover file: {e}")))?;

        tracing::info!(%filename, bytes = data.len(), "Cover uploaded");

        return Ok(Json(ApiResponse::with_data(
            "Cover uploaded successfully",
            UploadResult {
                url: format!("/uploads/{filename}"),
            },
        )));
    }

    Err(AppError::BadRequest(
        "No cover file field in request".to_string(),
    ))
}

use crate::server::error::RelayError;
use crate::server::types::{AppState, UploadResponse};
use crate::utils::constants::MAX_IMAGE_BYTES;
use crate::utils::filename::generate_upload_filename;
use axum::Json;
use axum::extract::{Multipart, State};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

// liveness probe, polled by the hosting platform
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

// uploads handler: validate the multipart image field, forward the bytes to
// the attachment host, translate its answer into the relay's response shape
pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, RelayError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(RelayError::from_multipart)?
    {
        if field.name() != Some("image") {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|mime| mime.starts_with("image/"));
        if !is_image {
            return Err(RelayError::Validation("Only image files are allowed".into()));
        }

        image = Some(field.bytes().await.map_err(RelayError::from_multipart)?);
    }

    let data = image.ok_or_else(|| RelayError::Validation("No file uploaded".into()))?;

    if data.len() > MAX_IMAGE_BYTES {
        return Err(RelayError::TooLarge);
    }

    let filename = generate_upload_filename();
    tracing::info!(%filename, size = data.len(), "forwarding upload to attachment host");

    let attachment = state.host.upload(data, &filename).await?;

    Ok(Json(UploadResponse {
        success: true,
        url: attachment.url,
        filename: attachment.filename,
    }))
}

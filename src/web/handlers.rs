// API handlers for the relay

use super::{
    SharedRemover, data_url, error::ApiError, extract_upload::extract_upload,
    models::RemoveBackgroundResponse,
};
use crate::provider::ProviderError;
use axum::{
    Json,
    extract::{Request, State},
};
use tracing::{error, info, warn};
use uuid::Uuid;

// --- POST /api/remove-bg ---
// Relays one uploaded image to the background-removal provider and returns
// the processed result as a base64 PNG data URL
pub async fn remove_background(
    State(remover): State<SharedRemover>,
    request: Request,
) -> Result<Json<RemoveBackgroundResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let upload = extract_upload(request).await?;
    info!(
        "Background removal request: request_id={}, size={} byte(s), file_name={:?}",
        request_id,
        upload.data.len(),
        upload.file_name
    );

    let processed = match remover.remove_background(upload).await {
        Ok(bytes) => bytes,
        Err(ProviderError::MissingCredential) => {
            warn!(
                "Refusing background removal request {}: no provider API key configured",
                request_id
            );
            return Err(ApiError::MissingApiKey);
        }
        Err(ProviderError::Rejected { status, body }) => {
            // Provider detail stays in the logs; the client only sees the
            // generic failure message.
            error!(
                "Provider rejected request {}: status={}, body={}",
                request_id, status, body
            );
            return Err(ApiError::RemovalFailed);
        }
        Err(ProviderError::Transport(err)) => {
            return Err(ApiError::Internal(format!(
                "provider request {} failed: {}",
                request_id, err
            )));
        }
    };

    info!(
        "Background removal complete: request_id={}, output={} byte(s)",
        request_id,
        processed.len()
    );

    Ok(Json(RemoveBackgroundResponse {
        image_url: data_url::png_data_url(&processed),
    }))
}

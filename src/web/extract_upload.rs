use axum::extract::{FromRequest, Multipart, Request};
use tracing::{debug, warn};

use super::error::ApiError;
use crate::provider::UploadedImage;

/// Multipart field name the client posts the image under.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Extracts the uploaded image from a multipart request.
///
/// Only the "file" field is consumed; other fields are ignored. Requests
/// without a usable "file" field are rejected here, before any provider call
/// is made.
pub async fn extract_upload(request: Request) -> Result<UploadedImage, ApiError> {
    // Convert Request to Multipart
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to process multipart request: {}", e)))?;

    let mut upload_opt: Option<UploadedImage> = None;
    let mut ignored_fields = 0;

    // Loop through all fields to find "file" and ignore others
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to process multipart field: {}", e)))?
    {
        if field.name() == Some(UPLOAD_FIELD_NAME) {
            if upload_opt.is_some() {
                // Found a second "file" field
                warn!("Multiple 'file' fields found in multipart request, using the last one");
            }

            let content_type = field.content_type().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            debug!(
                "Received file: name={:?}, content type: {:?}",
                file_name, content_type
            );

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {}", e)))?;

            if data.is_empty() {
                // An empty part is not a usable upload; same 400 as a
                // missing field.
                return Err(ApiError::BadRequest("No file uploaded".to_string()));
            }

            upload_opt = Some(UploadedImage {
                data,
                content_type,
                file_name,
            });
        } else {
            let field_name = field.name().unwrap_or("unnamed").to_string();
            debug!("Ignoring multipart field: {}", field_name);
            ignored_fields += 1;
        }
    }

    if ignored_fields > 0 {
        debug!(
            "Ignored {} non-file fields in multipart request",
            ignored_fields
        );
    }

    upload_opt.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))
}

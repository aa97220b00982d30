use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use tracing::{debug, warn};

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileData, UploadRequest},
};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Drain a multipart body into an [`UploadRequest`].
///
/// Parts carrying a filename become files; plain form fields are read and
/// dropped. An empty file input (no name, no bytes) is skipped.
pub async fn read_upload_request(mut multipart: Multipart) -> Result<UploadRequest, ApplicationError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        match field.file_name().map(str::to_string) {
            Some(filename) => {
                let mime_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_MIME_TYPE)
                    .to_string();
                let content = field.bytes().await.map_err(multipart_error)?;

                if filename.is_empty() && content.is_empty() {
                    debug!("Skipping empty file input '{}'", name);
                    continue;
                }

                request
                    .files
                    .push(FileData::new(name, content.to_vec(), filename, mime_type));
            }
            None => {
                let value = field.text().await.map_err(multipart_error)?;
                debug!("Ignoring form field '{}' ({} bytes)", name, value.len());
            }
        }
    }

    Ok(request)
}

fn multipart_error(error: MultipartError) -> ApplicationError {
    warn!("Invalid multipart data: {}", error);
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::BadRequest("Request is too large.".to_string())
    } else {
        ApplicationError::BadRequest(format!("Invalid upload request: {}", error.body_text()))
    }
}

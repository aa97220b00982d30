use axum::{
    body::Body,
    extract::{
        multipart::MultipartRejection, rejection::PathRejection, Multipart, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::file_dto::{listing_url, UploadedFileView},
        multipart::read_upload_request,
        state::AppState,
        views::{self, UploadSummaryView},
    },
    application::error::ApplicationError,
    domain::{config::ResponseMode, models::file::FileMetadata},
};

const SINGLE_FIELD: &str = "file";
const MULTIPLE_FIELD: &str = "files";

/// A body that is not `multipart/form-data` at all.
fn multipart_rejection(rejection: MultipartRejection) -> ApplicationError {
    warn!("Rejected upload body: {}", rejection.body_text());
    ApplicationError::BadRequest(format!("Invalid upload request: {}", rejection.body_text()))
}

/// Build a safe Content-Disposition value for an attachment download.
///
/// Control characters, quotes and backslashes are replaced in the plain
/// `filename` parameter; non-ASCII names also get an RFC 5987 `filename*`.
fn content_disposition_header(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if filename.is_ascii() && sanitized == filename {
        return format!("attachment; filename=\"{}\"", filename);
    }

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized,
        urlencoding::encode(filename)
    )
}

pub struct FileController;

impl FileController {
    /// POST /upload
    ///
    /// In summary mode a single file under `file`; in listing mode any number
    /// of files under `files`.
    pub async fn upload_file(
        State(app_state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Response, ApplicationError> {
        let multipart = multipart.map_err(multipart_rejection)?;
        let request = read_upload_request(multipart).await?;

        let stored = match app_state.config.server.response_mode {
            ResponseMode::Summary => {
                app_state
                    .upload_service
                    .accept(request, SINGLE_FIELD, Some(1))
                    .await?
            }
            ResponseMode::Listing => {
                app_state
                    .upload_service
                    .accept(request, MULTIPLE_FIELD, None)
                    .await?
            }
        };

        Ok(Self::respond(&app_state, stored))
    }

    /// POST /upload-multiple
    pub async fn upload_multiple(
        State(app_state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Response, ApplicationError> {
        let multipart = multipart.map_err(multipart_rejection)?;
        let request = read_upload_request(multipart).await?;
        let max_files = app_state.config.limits.max_files;

        let stored = app_state
            .upload_service
            .accept(request, MULTIPLE_FIELD, Some(max_files))
            .await?;

        Ok(Self::respond(&app_state, stored))
    }

    fn respond(app_state: &AppState, stored: Vec<FileMetadata>) -> Response {
        info!("Upload request stored {} file(s)", stored.len());

        match app_state.config.server.response_mode {
            ResponseMode::Summary => {
                let page = UploadSummaryView {
                    files: stored.into_iter().map(UploadedFileView::from).collect(),
                };
                views::render(&page).into_response()
            }
            ResponseMode::Listing => {
                let message = format!("{} file(s) uploaded successfully", stored.len());
                Redirect::to(&listing_url(&message)).into_response()
            }
        }
    }

    /// GET /download/{filename}
    ///
    /// A name that cannot be decoded is reported as missing.
    pub async fn download_file(
        State(app_state): State<AppState>,
        filename: Result<Path<String>, PathRejection>,
    ) -> Result<Response, ApplicationError> {
        let Path(filename) = filename.map_err(|rejection| {
            warn!("Undecodable download name: {}", rejection.body_text());
            ApplicationError::NotFound
        })?;
        let content = app_state.storage_service.download(&filename).await?;

        let mime_type = mime_guess::from_path(&filename).first_or_octet_stream();
        info!("Serving download {} ({} bytes)", filename, content.len());

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type.as_ref())
            .header(header::CONTENT_LENGTH, content.len())
            .header(
                header::CONTENT_DISPOSITION,
                content_disposition_header(&filename),
            )
            .body(Body::from(content))
            .map_err(|e| ApplicationError::InternalError(format!("Cannot build response: {}", e)))
    }

    /// GET /delete/{filename}
    ///
    /// Always answers with a redirect to the listing; the banner tells
    /// whether the file was removed.
    pub async fn delete_file(
        State(app_state): State<AppState>,
        filename: Result<Path<String>, PathRejection>,
    ) -> Redirect {
        let Path(filename) = match filename {
            Ok(path) => path,
            Err(rejection) => {
                warn!("Undecodable delete name: {}", rejection.body_text());
                return Redirect::to(&listing_url("Error deleting file: file not found"));
            }
        };

        let message = match app_state.storage_service.delete(&filename).await {
            Ok(()) => {
                info!("Deleted {}", filename);
                "File deleted successfully".to_string()
            }
            Err(ApplicationError::NotFound) => {
                warn!("Delete requested for missing file {}", filename);
                "Error deleting file: file not found".to_string()
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", filename, e);
                format!("Error deleting file: {}", e)
            }
        };

        Redirect::to(&listing_url(&message))
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{
    adapters::views::{self, ErrorView},
    application::error::ApplicationError,
};

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::InvalidType { .. }
            | ApplicationError::TooLarge { .. }
            | ApplicationError::NoFileProvided
            | ApplicationError::TooManyFiles(_)
            | ApplicationError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound => StatusCode::NOT_FOUND,
            ApplicationError::StorageUnavailable(_) | ApplicationError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let heading = match self {
            ApplicationError::NotFound => {
                warn!("Requested file not found");
                "File Not Found"
            }
            ApplicationError::StorageUnavailable(ref msg) => {
                error!("Storage unavailable: {}", msg);
                "Server Error"
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                "Server Error"
            }
            ref client_error => {
                warn!("Upload rejected: {}", client_error);
                "Upload Error"
            }
        };

        let page = ErrorView::new(heading, self.to_string());
        (status, views::render(&page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApplicationError::InvalidType {
                mime_type: "x/y".into(),
                allowed: vec![],
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApplicationError::TooLarge { size: 2, limit: 1 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApplicationError::NoFileProvided.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApplicationError::TooManyFiles(5).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApplicationError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApplicationError::StorageUnavailable("gone".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApplicationError::InternalError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_is_html_with_status() {
        let response = ApplicationError::NoFileProvided.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
    }
}

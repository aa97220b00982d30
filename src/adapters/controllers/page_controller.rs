use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use tracing::warn;

use crate::{
    adapters::{
        dto::file_dto::{FileEntryView, ListingQuery},
        state::AppState,
        views::{self, Banner, IndexView},
    },
    application::error::ApplicationError,
};

pub struct PageController;

impl PageController {
    /// GET /
    pub async fn index(
        State(app_state): State<AppState>,
        query: Result<Query<ListingQuery>, QueryRejection>,
    ) -> Result<Html<String>, ApplicationError> {
        let Query(query) = query.map_err(|rejection| {
            warn!("Invalid listing query: {}", rejection.body_text());
            ApplicationError::BadRequest(format!("Invalid query: {}", rejection.body_text()))
        })?;
        let files = app_state.listing_service.list_files().await?;

        let page = IndexView {
            mode: app_state.config.server.response_mode,
            max_files: app_state.config.limits.max_files,
            banner: Banner::from_message(query.message.as_deref()),
            files: files.into_iter().map(FileEntryView::from).collect(),
        };

        Ok(views::render(&page))
    }
}

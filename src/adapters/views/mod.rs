//! HTML rendering from typed view-models.
//!
//! Each page is a plain struct implementing [`View`]; handlers build the
//! struct and never touch markup. All dynamic text goes through
//! [`text`] or [`attr`].

mod banner;
mod error;
mod index;
mod layout;
mod summary;

pub use banner::{Banner, BannerKind};
pub use error::ErrorView;
pub use index::IndexView;
pub use summary::UploadSummaryView;

use std::borrow::Cow;

use axum::response::Html;

pub trait View {
    fn title(&self) -> Cow<'_, str>;

    fn body(&self) -> String;

    fn render(&self) -> String {
        layout::document(&self.title(), &self.body())
    }
}

pub fn render<V: View>(view: &V) -> Html<String> {
    Html(view.render())
}

/// Escape for element content.
pub(crate) fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape for a double-quoted attribute value.
pub(crate) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

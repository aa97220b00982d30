use std::borrow::Cow;

use super::View;

/// Error page with a link back to the upload form.
#[derive(Debug, Clone)]
pub struct ErrorView {
    pub heading: String,
    pub message: String,
}

impl ErrorView {
    pub fn new(heading: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            message: message.into(),
        }
    }
}

impl View for ErrorView {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.heading.as_str())
    }

    fn body(&self) -> String {
        format!(
            r#"<h1>{}</h1>
<p>{}</p>
<a href="/">Back to upload form</a>"#,
            super::text(&self.heading),
            super::text(&self.message)
        )
    }
}

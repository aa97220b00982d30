use std::borrow::Cow;
use std::fmt::Write;

use super::View;
use crate::adapters::dto::file_dto::UploadedFileView;

/// Result page listing the files accepted by one upload request.
#[derive(Debug, Clone)]
pub struct UploadSummaryView {
    pub files: Vec<UploadedFileView>,
}

impl View for UploadSummaryView {
    fn title(&self) -> Cow<'_, str> {
        match self.files.len() {
            1 => Cow::Borrowed("File Uploaded Successfully"),
            n => Cow::Owned(format!("{n} Files Uploaded Successfully")),
        }
    }

    fn body(&self) -> String {
        let mut html = format!("<h1>{}</h1>\n", super::text(&self.title()));

        for file in &self.files {
            let _ = write!(
                html,
                r#"<div class="file-item">
<p>Filename: {name}</p>
<p>Size: {size} bytes</p>
<p>Type: {mime}</p>
<a href="{href}">Download File</a>
</div>
"#,
                name = super::text(&file.storage_name),
                size = file.size,
                mime = super::text(&file.mime_type),
                href = super::attr(&file.download_url),
            );
        }

        html.push_str(r#"<a href="/">Back to upload form</a>"#);
        html
    }
}

use std::borrow::Cow;
use std::fmt::Write;

use super::{Banner, View};
use crate::{
    adapters::dto::file_dto::{FileEntryView, PreviewView},
    domain::config::ResponseMode,
};

/// Home page: upload form(s), an optional banner and the stored files.
#[derive(Debug, Clone)]
pub struct IndexView {
    pub mode: ResponseMode,
    pub max_files: usize,
    pub banner: Option<Banner>,
    pub files: Vec<FileEntryView>,
}

impl IndexView {
    fn forms(&self) -> String {
        match self.mode {
            ResponseMode::Summary => format!(
                r#"<h2>Upload Single File</h2>
<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="file" />
<button type="submit">Upload</button>
</form>
<h2>Upload Multiple Files (up to {})</h2>
<form action="/upload-multiple" method="post" enctype="multipart/form-data">
<input type="file" name="files" multiple />
<button type="submit">Upload</button>
</form>
"#,
                self.max_files
            ),
            ResponseMode::Listing => r#"<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="files" multiple />
<button type="submit">Upload</button>
</form>
"#
            .to_string(),
        }
    }

    fn listing(&self) -> String {
        if self.files.is_empty() {
            return r#"<p class="empty">No files uploaded yet</p>"#.to_string();
        }

        let mut html = String::from(r#"<ul class="file-list">"#);
        for file in &self.files {
            let preview = match &file.preview {
                PreviewView::Image { src } => format!(
                    r#"<img src="{}" alt="{}">"#,
                    super::attr(src),
                    super::attr(&file.name)
                ),
                PreviewView::Text(content) => format!("<pre>{}</pre>", super::text(content)),
                PreviewView::None => String::new(),
            };

            let _ = write!(
                html,
                r#"
<li class="file-item">
<strong>{name}</strong> ({size} KB)
{preview}
<div class="actions"><a href="{download}">Download</a><a href="{delete}">Delete</a></div>
</li>"#,
                name = super::text(&file.name),
                size = file.size_kib,
                download = super::attr(&file.download_url),
                delete = super::attr(&file.delete_url),
            );
        }
        html.push_str("\n</ul>");
        html
    }
}

impl View for IndexView {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("File Upload")
    }

    fn body(&self) -> String {
        let banner = self
            .banner
            .as_ref()
            .map(Banner::render)
            .unwrap_or_default();

        format!(
            "<h1>File Upload</h1>\n{}\n{}<h2>Uploaded Files</h2>\n{}",
            banner,
            self.forms(),
            self.listing()
        )
    }
}

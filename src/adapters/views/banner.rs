#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// Status message shown above the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    /// A message reads as a success when it mentions "success"; any other
    /// text is an error. Blank messages produce no banner.
    pub fn from_message(message: Option<&str>) -> Option<Self> {
        let text = message?.trim();
        if text.is_empty() {
            return None;
        }

        let kind = if text.contains("success") {
            BannerKind::Success
        } else {
            BannerKind::Error
        };

        Some(Self {
            kind,
            text: text.to_string(),
        })
    }

    pub(super) fn render(&self) -> String {
        format!(
            r#"<div class="message {}">{}</div>"#,
            self.kind.css_class(),
            super::text(&self.text)
        )
    }
}

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, Arial, sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; color: #333; }
h1 { color: #2c3e50; }
form { margin-bottom: 1.5rem; }
.message { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.message.success { background: #e6f4ea; color: #1e6b34; border: 1px solid #b7dfc2; }
.message.error { background: #fdecea; color: #8a1f11; border: 1px solid #f5c2bb; }
.file-list { list-style: none; padding: 0; }
.file-item { border-bottom: 1px solid #ccc; padding: 10px 0; margin-bottom: 10px; }
.file-item img { max-width: 200px; max-height: 200px; display: block; margin-top: 0.5rem; }
.file-item pre { background: #f7f7f7; padding: 0.5rem; white-space: pre-wrap; }
.actions a { margin-right: 1rem; }
.empty { color: #777; font-style: italic; }
"#;

pub(super) fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = super::text(title),
    )
}

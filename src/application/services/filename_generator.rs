//! Storage names for uploaded files.
//!
//! A name has the shape `{field}-{unix millis}-{random}{ext}`. The timestamp
//! and the random draw make collisions unlikely but not impossible, so the
//! storage layer refuses to overwrite an existing file.

use chrono::Utc;
use rand::Rng;

const RANDOM_UPPER_BOUND: u32 = 1_000_000_000;

pub fn generate_name(field_name: &str, original_filename: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..RANDOM_UPPER_BOUND);

    format!(
        "{}-{}-{}{}",
        sanitize_field(field_name),
        millis,
        suffix,
        extension_of(original_filename)
    )
}

/// Extension of the last path component, dot included, case preserved.
///
/// Empty when the name has no dot, only a leading one (`.bashrc`), or is
/// `..`. Any directory part sent by the client is ignored. Letters and digits
/// from any script are kept; an extension carrying anything else is dropped.
pub fn extension_of(filename: &str) -> &str {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    if basename == ".." {
        return "";
    }

    match basename.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = &basename[idx..];
            if ext[1..].chars().all(char::is_alphanumeric) {
                ext
            } else {
                ""
            }
        }
        _ => "",
    }
}

fn sanitize_field(field_name: &str) -> String {
    let cleaned: String = field_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.png"), ".png");
        assert_eq!(extension_of("image.PNG"), ".PNG");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("no_extension"), "");
        assert_eq!(extension_of(".hidden"), "");
        assert_eq!(extension_of("trailing."), ".");
        assert_eq!(extension_of("dir.d/notes"), "");
        assert_eq!(extension_of("C:\\Users\\me\\report.pdf"), ".pdf");
        assert_eq!(extension_of("evil.p/../hp"), "");
        assert_eq!(extension_of("odd.t xt"), "");
    }

    #[test]
    fn test_extension_of_dot_names() {
        assert_eq!(extension_of(".."), "");
        assert_eq!(extension_of("uploads/.."), "");
        assert_eq!(extension_of("..."), ".");
        assert_eq!(extension_of("..txt"), ".txt");
    }

    #[test]
    fn test_extension_of_keeps_non_ascii_letters() {
        assert_eq!(extension_of("notes.тхт"), ".тхт");
        assert_eq!(extension_of("bild.ÄÖ"), ".ÄÖ");
        assert_eq!(extension_of("notes.t\u{200b}xt"), "");
        assert!(generate_name("file", "notes.тхт").ends_with(".тхт"));
    }

    #[test]
    fn test_generate_name_shape() {
        let name = generate_name("file", "photo.png");
        let parts: Vec<&str> = name.trim_end_matches(".png").split('-').collect();

        assert!(name.starts_with("file-"));
        assert!(name.ends_with(".png"));
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert!(parts[2].parse::<u32>().unwrap() < RANDOM_UPPER_BOUND);
    }

    #[test]
    fn test_generate_name_has_no_separators() {
        let name = generate_name("../files", "../../etc/passwd.txt");

        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
        assert!(!name.contains(".."));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_generate_name_is_unique_in_practice() {
        let first = generate_name("files", "a.txt");
        let second = generate_name("files", "a.txt");

        assert_ne!(first, second);
    }
}

//! On-disk persistence for uploaded résumés.

use std::path::Path;

use uuid::Uuid;

/// Reduces an untrusted upload filename to a single safe path component.
///
/// Drops any directory part (both `/` and `\` separators), maps every run
/// of characters outside ASCII alphanumerics, `.` and `-` to one `_`, and
/// trims leading/trailing dots and underscores.
pub fn sanitize_filename(raw: &str) -> String {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-') {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches(|c: char| c == '.' || c == '_').to_string()
}

/// Writes an upload under `root` and returns the stored filename.
///
/// Stored names are uuid-prefixed so two uploads named `cv.pdf` can never
/// clobber each other.
pub async fn persist_upload(root: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<String> {
    let safe = sanitize_filename(filename);
    let stored = if safe.is_empty() {
        format!("{}.bin", Uuid::new_v4())
    } else {
        format!("{}_{safe}", Uuid::new_v4())
    };

    tokio::fs::write(root.join(&stored), bytes).await?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename_passes_through() {
        assert_eq!(sanitize_filename("cv.pdf"), "cv.pdf");
        assert_eq!(sanitize_filename("resume-2024.v2.pdf"), "resume-2024.v2.pdf");
    }

    #[test]
    fn test_path_components_are_stripped() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
    }

    #[test]
    fn test_special_characters_collapse_to_underscores() {
        assert_eq!(
            sanitize_filename("my resume (final).pdf"),
            "my_resume_final_.pdf"
        );
    }

    #[test]
    fn test_hidden_file_prefix_is_trimmed() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
    }

    #[test]
    fn test_nothing_safe_left_yields_empty() {
        assert_eq!(sanitize_filename("???"), "");
    }

    #[tokio::test]
    async fn test_persist_upload_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let stored = persist_upload(dir.path(), "cv.pdf", b"%PDF-fake")
            .await
            .unwrap();

        assert!(stored.ends_with("_cv.pdf"), "Stored name was {stored}");
        let on_disk = tokio::fs::read(dir.path().join(&stored)).await.unwrap();
        assert_eq!(on_disk, b"%PDF-fake");
    }

    #[tokio::test]
    async fn test_persist_upload_same_name_twice_keeps_both() {
        let dir = tempfile::tempdir().unwrap();
        let first = persist_upload(dir.path(), "cv.pdf", b"one").await.unwrap();
        let second = persist_upload(dir.path(), "cv.pdf", b"two").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(tokio::fs::read(dir.path().join(&first)).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(dir.path().join(&second)).await.unwrap(), b"two");
    }
}

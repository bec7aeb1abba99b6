//! Resume download: serves the configured PDF, or a placeholder when the
//! file is missing and the placeholder fallback is enabled.

pub mod handlers;

use std::io::ErrorKind;
use std::path::Path;

use bytes::Bytes;

/// Payload served in place of a missing resume file.
pub const PLACEHOLDER_PDF: &[u8] = b"PDF placeholder - Replace with actual resume file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeAsset {
    File(Bytes),
    Missing,
}

/// Reads the resume at `path`. A missing file is not an error.
pub async fn load_resume(path: &Path) -> std::io::Result<ResumeAsset> {
    match tokio::fs::read(path).await {
        Ok(contents) => Ok(ResumeAsset::File(Bytes::from(contents))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResumeAsset::Missing),
        Err(e) => Err(e),
    }
}

/// `attachment` disposition with quotes and control characters stripped
/// from the filename.
pub fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.7 fake").unwrap();

        let asset = load_resume(&path).await.unwrap();
        assert_eq!(asset, ResumeAsset::File(Bytes::from_static(b"%PDF-1.7 fake")));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let asset = load_resume(&dir.path().join("absent.pdf")).await.unwrap();
        assert_eq!(asset, ResumeAsset::Missing);
    }

    #[tokio::test]
    async fn test_load_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_resume(dir.path()).await.is_err());
    }

    #[test]
    fn test_content_disposition_strips_quotes() {
        assert_eq!(
            content_disposition("my \"cv\".pdf"),
            "attachment; filename=\"my cv.pdf\""
        );
    }
}

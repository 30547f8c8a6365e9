//! Input manager for enumerating a CV folder and handling different file types

use crate::error::{CvExtractorError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// List the supported CV files directly inside `dir`, sorted by file name.
    pub fn enumerate(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(CvExtractorError::InputDirNotFound(dir.display().to_string()));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if FileType::from_path(&path).is_supported() {
                files.push(path);
            } else {
                debug!("Ignoring unsupported file: {}", path.display());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Extract the text of one CV. Whitespace-only output counts as a failure.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CvExtractorError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Docx | FileType::Doc => {
                info!("Extracting text from Word document: {}", path.display());
                DocxExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(CvExtractorError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        if text.trim().is_empty() {
            return Err(CvExtractorError::NoTextExtracted(display_name(path)));
        }

        Ok(text)
    }
}

/// The bare file name used to label records and log lines.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_enumerate_selects_supported_extensions_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.pdf", "b.PDF", "c.docx", "d.DOCX", "e.doc", "f.DOC", "g.txt", "h.TXT"] {
            touch(dir.path(), name, "x");
        }
        for name in ["notes.md", "photo.png", "README", "cv.txt.bak"] {
            touch(dir.path(), name, "x");
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = InputManager::new().enumerate(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();

        assert_eq!(
            names,
            vec!["a.pdf", "b.PDF", "c.docx", "d.DOCX", "e.doc", "f.DOC", "g.txt", "h.TXT"]
        );
    }

    #[test]
    fn test_enumerate_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = InputManager::new().enumerate(&missing).unwrap_err();
        assert!(matches!(err, CvExtractorError::InputDirNotFound(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_enumerate_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ignored.xyz", "x");

        let files = InputManager::new().enumerate(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_extract_whitespace_only_text() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "blank.txt", "  \n\t ");

        let err = InputManager::new()
            .extract_text(&dir.path().join("blank.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, CvExtractorError::NoTextExtracted(ref name) if name == "blank.txt"));
    }

    #[tokio::test]
    async fn test_extract_unsupported_file_type() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "cv.xyz", "Jane Doe");

        let err = InputManager::new()
            .extract_text(&dir.path().join("cv.xyz"))
            .await
            .unwrap_err();
        assert!(matches!(err, CvExtractorError::UnsupportedFormat(_)));
    }
}

//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "doc" => FileType::Doc,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("Docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("DOC"), FileType::Doc);
        assert_eq!(FileType::from_extension("TxT"), FileType::Text);
        assert_eq!(FileType::from_extension("md"), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path(Path::new("cvs/jane.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("cvs/README")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("cvs/archive.tar.gz")), FileType::Unknown);
        assert!(!FileType::from_path(Path::new(".txt")).is_supported());
    }
}

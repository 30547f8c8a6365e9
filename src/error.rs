//! Error handling for the CV extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("No text could be extracted from {0}")]
    NoTextExtracted(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("Input folder not found: {0}")]
    InputDirNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Empty response from completion API")]
    EmptyResponse,

    #[error("No JSON object found in model response")]
    NoJsonFound,

    #[error("JSON parsing error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No data to save")]
    NothingToExport,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CvExtractorError {
    /// Fatal errors abort the whole run; everything else only skips the current file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CvExtractorError::InputDirNotFound(_)
                | CvExtractorError::MissingCredential(_)
                | CvExtractorError::Configuration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CvExtractorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvExtractorError {
    fn from(err: anyhow::Error) -> Self {
        CvExtractorError::InvalidInput(err.to_string())
    }
}

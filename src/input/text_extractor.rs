//! Text extraction from various file formats

use crate::error::{CvExtractorError, Result};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        // pdf-extract can panic on malformed documents; a blocking task turns that into an error.
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                CvExtractorError::PdfExtraction(format!("PDF reader aborted on '{}': {}", display, e))
            })?
            .map_err(|e| {
                CvExtractorError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", display, e))
            })
    }
}

/// Reads Word documents paragraph by paragraph.
///
/// Also used for `.doc`; legacy binary Word files are not OOXML and will fail to parse.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            CvExtractorError::DocxExtraction(format!("Failed to read document '{}': {}", path.display(), e))
        })?;

        Ok(paragraph_text(&docx.document.children))
    }
}

fn paragraph_text(children: &[docx_rs::DocumentChild]) -> String {
    let mut paragraphs = Vec::new();

    for child in children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            push_paragraph_children(&paragraph.children, &mut line);
            paragraphs.push(line);
        }
    }

    paragraphs.join("\n")
}

/// Hyperlinks carry their own runs; profile URLs usually live there.
fn push_paragraph_children(children: &[docx_rs::ParagraphChild], line: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        docx_rs::RunChild::Text(t) => line.push_str(&t.text),
                        docx_rs::RunChild::Tab(_) => line.push('\t'),
                        docx_rs::RunChild::Break(_) => line.push('\n'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(hyperlink) => {
                push_paragraph_children(&hyperlink.children, line);
            }
            _ => {}
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(decode_lenient(&bytes))
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences.
pub fn decode_lenient(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

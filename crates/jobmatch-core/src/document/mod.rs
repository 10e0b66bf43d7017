//! Document text extraction.
//!
//! Turns raw resume bytes into plain text. The profile engine only ever sees
//! the text, so [`read_document_text`] swallows every failure and yields an
//! empty string instead.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfPage};

use std::path::Path;

use tracing::{debug, warn};

use crate::error::DocumentError;

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Pages carry images but no text layer (scanned document).
    Scanned,
    /// Empty or unreadable.
    Empty,
}

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" | "md" => Ok(Self::PlainText),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Analyze the PDF to determine its type.
    fn analyze(&self) -> PdfType;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Decode document bytes into text.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Pdf => {
            let mut extractor = PdfExtractor::new();
            extractor.load(data)?;
            let content = extractor.extract_all()?;
            if content.pdf_type == PdfType::Scanned {
                warn!("PDF has no text layer; scanned resumes are not supported");
            }
            Ok(content.text)
        }
        DocumentFormat::PlainText => {
            let text = String::from_utf8_lossy(data);
            Ok(text.trim_start_matches('\u{feff}').to_string())
        }
    }
}

/// Read a resume from disk and return its text.
///
/// Any failure (missing file, unknown format, broken PDF) is logged and
/// produces an empty string.
pub fn read_document_text(path: &Path) -> String {
    let format = match DocumentFormat::from_path(path) {
        Ok(format) => format,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return String::new();
        }
    };

    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return String::new();
        }
    };

    match extract_text(&data, format) {
        Ok(text) => {
            debug!("Read {} characters from {}", text.len(), path.display());
            text
        }
        Err(e) => {
            warn!("Cannot extract text from {}: {}", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("txt").unwrap(), DocumentFormat::PlainText);
        assert!(matches!(
            DocumentFormat::from_extension("docx"),
            Err(DocumentError::UnsupportedFormat(ext)) if ext == "docx"
        ));
    }

    #[test]
    fn test_plain_text_strips_bom() {
        let text = extract_text("\u{feff}Jane Doe\nEngineer".as_bytes(), DocumentFormat::PlainText).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_broken_pdf_is_error() {
        let result = extract_text(b"definitely not a pdf", DocumentFormat::Pdf);
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_read_document_text_missing_file_is_empty() {
        let text = read_document_text(Path::new("/nonexistent/resume.pdf"));
        assert!(text.is_empty());
    }

    #[test]
    fn test_read_document_text_unsupported_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "Jane Doe").unwrap();

        assert!(read_document_text(&path).is_empty());
    }

    #[test]
    fn test_read_document_text_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\njane@example.com\n").unwrap();

        assert_eq!(read_document_text(&path), "Jane Doe\njane@example.com\n");
    }
}

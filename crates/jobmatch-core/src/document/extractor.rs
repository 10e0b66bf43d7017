//! PDF text extraction using lopdf and pdf-extract.

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::DocumentError;

/// Minimum number of text characters for a PDF to count as text-based.
const MIN_TEXT_LENGTH: usize = 20;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Type of PDF content.
    pub pdf_type: PdfType,
    /// Extracted text of the whole document.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
    /// Whether the page references image XObjects.
    pub has_images: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract the text of the whole document plus per-page details.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| DocumentError::Parse("No document loaded".to_string()))?;

        let page_ids = doc.get_pages();
        if page_ids.is_empty() {
            return Err(DocumentError::NoPages);
        }

        let pages: Vec<PdfPage> = page_ids
            .iter()
            .map(|(&number, &page_id)| PdfPage {
                number,
                text: self.extract_page_text(number).unwrap_or_default(),
                has_images: self.page_has_images(doc, page_id),
            })
            .collect();

        // pdf-extract keeps reading order better than lopdf; per-page text is
        // only a fallback when it fails.
        let text = match self.extract_text() {
            Ok(text) => text,
            Err(e) => {
                debug!("pdf-extract failed ({}), joining per-page text", e);
                pages
                    .iter()
                    .map(|p| p.text.as_str())
                    .filter(|t| !t.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
        };

        let pdf_type = classify(&text, pages.iter().any(|p| p.has_images));

        debug!(
            "PDF analysis: {} pages, {} chars text -> {:?}",
            pages.len(),
            text.len(),
            pdf_type
        );

        Ok(PdfContent {
            pdf_type,
            text,
            pages,
        })
    }

    fn page_has_images(&self, doc: &Document, page_id: ObjectId) -> bool {
        let Some(resources) = self.get_page_resources(doc, page_id) else {
            return false;
        };
        let Ok(xobjects) = resources.get(b"XObject") else {
            return false;
        };
        let Ok((_, Object::Dictionary(xobj_dict))) = doc.dereference(xobjects) else {
            return false;
        };

        xobj_dict.iter().any(|(_name, obj_ref)| {
            matches!(doc.dereference(obj_ref), Ok((_, Object::Stream(stream)))
                if stream
                    .dict
                    .get(b"Subtype")
                    .and_then(|s| s.as_name())
                    .map(|n| n == b"Image")
                    .unwrap_or(false))
        })
    }

    /// Get resources dictionary for a page, handling inheritance
    fn get_page_resources(&self, doc: &Document, node_id: ObjectId) -> Option<Dictionary> {
        let Object::Dictionary(dict) = doc.get_object(node_id).ok()? else {
            return None;
        };

        if let Ok(resources) = dict.get(b"Resources") {
            if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                return Some(res_dict.clone());
            }
        }

        // Continue up the page tree
        match dict.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => self.get_page_resources(doc, *parent_id),
            _ => None,
        }
    }
}

fn classify(text: &str, has_images: bool) -> PdfType {
    let has_text = text.trim().chars().count() >= MIN_TEXT_LENGTH;
    match (has_text, has_images) {
        (true, _) => PdfType::Text,
        (false, true) => PdfType::Scanned,
        (false, false) => PdfType::Empty,
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| DocumentError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DocumentError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| DocumentError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DocumentError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        match self.extract_all() {
            Ok(content) => content.pdf_type,
            Err(_) => PdfType::Empty,
        }
    }

    fn extract_text(&self) -> Result<String> {
        if self.raw_data.is_empty() {
            return Err(DocumentError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| DocumentError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| DocumentError::Parse("No document loaded".to_string()))?;

        let text = doc
            .extract_text(&[page])
            .map_err(|e| DocumentError::TextExtraction(e.to_string()))?;
        trace!("Page {}: {} chars", page, text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert_eq!(extractor.analyze(), PdfType::Empty);
    }

    #[test]
    fn test_unloaded_extractor_errors() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(DocumentError::Parse(_))));
        assert!(matches!(extractor.extract_all(), Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"%PDF-garbage"), Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("Jane Doe, Senior Engineer at Acme", false), PdfType::Text);
        assert_eq!(classify("  ", true), PdfType::Scanned);
        assert_eq!(classify("", false), PdfType::Empty);
    }
}

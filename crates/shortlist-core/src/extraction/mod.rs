pub mod docx;
pub mod pdftotext;

use crate::error::ShortlistError;
use crate::model::{DocumentKind, SourceDocument};
use std::path::Path;
use tracing::{debug, warn};

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ShortlistError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Turns document bytes into plain text in reading order.
pub struct TextNormalizer {
    pdf: Box<dyn PdfExtractor>,
}

impl TextNormalizer {
    pub fn new(pdf: Box<dyn PdfExtractor>) -> Self {
        TextNormalizer { pdf }
    }

    pub fn pdf_backend(&self) -> &str {
        self.pdf.backend_name()
    }

    /// Like [`TextNormalizer::normalize`] but reports why no text came out.
    pub fn try_normalize(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, ShortlistError> {
        match kind {
            DocumentKind::Paginated => {
                let pages = self.pdf.extract_pages(bytes)?;
                debug!(
                    backend = self.pdf.backend_name(),
                    pages = pages.len(),
                    "extracted paginated document"
                );
                Ok(join_pages(&pages))
            }
            DocumentKind::FlowText => docx::extract_text(bytes),
            DocumentKind::Unsupported => Err(ShortlistError::UnsupportedDocument(
                "unrecognized file extension".into(),
            )),
        }
    }

    /// [`TextNormalizer::try_normalize`] for a whole document, so errors can
    /// name the file they came from.
    pub fn try_normalize_document(&self, doc: &SourceDocument) -> Result<String, ShortlistError> {
        if let Some(reason) = &doc.read_error {
            let path = match &doc.source_path {
                Some(p) => p.display().to_string(),
                None => doc.file_name.clone(),
            };
            return Err(ShortlistError::DocumentRead {
                path,
                reason: reason.clone(),
            });
        }
        if doc.kind == DocumentKind::Unsupported {
            let detail = match Path::new(&doc.file_name).extension() {
                Some(ext) => format!("'{}' has extension .{}", doc.file_name, ext.to_string_lossy()),
                None => format!("'{}' has no file extension", doc.file_name),
            };
            return Err(ShortlistError::UnsupportedDocument(detail));
        }
        self.try_normalize(&doc.bytes, doc.kind)
    }

    /// Never fails: any extraction error yields empty text.
    pub fn normalize(&self, bytes: &[u8], kind: DocumentKind) -> String {
        match self.try_normalize(bytes, kind) {
            Ok(text) => text,
            Err(e) => {
                warn!(%kind, error = %e, "text extraction failed, continuing with empty text");
                String::new()
            }
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        TextNormalizer::new(Box::new(pdftotext::PdftotextExtractor::new()))
    }
}

/// Concatenate pages in page order without adding separators.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut ordered: Vec<&PageContent> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_number);
    ordered.iter().map(|p| p.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingExtractor;

    impl PdfExtractor for FailingExtractor {
        fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ShortlistError> {
            Err(ShortlistError::Extraction("broken xref table".into()))
        }

        fn backend_name(&self) -> &str {
            "failing"
        }
    }

    struct PagesExtractor(Vec<PageContent>);

    impl PdfExtractor for PagesExtractor {
        fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ShortlistError> {
            Ok(self.0.clone())
        }

        fn backend_name(&self) -> &str {
            "pages"
        }
    }

    fn page(page_number: usize, text: &str) -> PageContent {
        PageContent {
            page_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_join_pages_in_page_order() {
        let pages = vec![page(2, "second\n"), page(1, "first\n")];
        assert_eq!(join_pages(&pages), "first\nsecond\n");
    }

    #[test]
    fn test_paginated_document_concatenated() {
        let normalizer = TextNormalizer::new(Box::new(PagesExtractor(vec![
            page(1, "Name: Jane\n"),
            page(2, "Address: Kandy\n"),
        ])));
        let text = normalizer.normalize(b"%PDF", DocumentKind::Paginated);
        assert_eq!(text, "Name: Jane\nAddress: Kandy\n");
    }

    #[test]
    fn test_failure_becomes_empty_text() {
        let normalizer = TextNormalizer::new(Box::new(FailingExtractor));
        assert_eq!(normalizer.normalize(b"garbage", DocumentKind::Paginated), "");
        assert!(normalizer
            .try_normalize(b"garbage", DocumentKind::Paginated)
            .is_err());
    }

    #[test]
    fn test_unsupported_kind_is_empty() {
        let normalizer = TextNormalizer::new(Box::new(FailingExtractor));
        assert_eq!(normalizer.normalize(b"hello", DocumentKind::Unsupported), "");
        assert!(matches!(
            normalizer.try_normalize(b"hello", DocumentKind::Unsupported),
            Err(ShortlistError::UnsupportedDocument(_))
        ));
    }

    #[test]
    fn test_unsupported_document_names_file_and_extension() {
        let normalizer = TextNormalizer::new(Box::new(FailingExtractor));
        let err = normalizer
            .try_normalize_document(&SourceDocument::new("notes.txt", b"hi".to_vec()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported document: 'notes.txt' has extension .txt. Supported formats: .pdf, .docx, .doc"
        );

        let err = normalizer
            .try_normalize_document(&SourceDocument::new("README", vec![]))
            .unwrap_err();
        assert!(err.to_string().contains("'README' has no file extension"));
    }

    #[test]
    fn test_unreadable_document_names_path() {
        let normalizer = TextNormalizer::new(Box::new(FailingExtractor));
        let doc = SourceDocument::open(Path::new("/nonexistent/cv.pdf"));
        let err = normalizer.try_normalize_document(&doc).unwrap_err();
        assert!(matches!(err, ShortlistError::DocumentRead { .. }));
        assert!(err.to_string().starts_with("cannot read '/nonexistent/cv.pdf': "));
    }

    #[test]
    fn test_corrupt_docx_is_empty() {
        let normalizer = TextNormalizer::new(Box::new(FailingExtractor));
        assert_eq!(normalizer.normalize(b"not a zip", DocumentKind::FlowText), "");
    }
}

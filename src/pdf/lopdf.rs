use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{PdfBackend, PdfDocument, PdfError};

/// Page-aware backend built on lopdf
pub struct LopdfBackend;

struct LopdfDocument {
    doc: Document,
    /// Page numbers in document order
    pages: Vec<u32>,
}

impl PdfBackend for LopdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError> {
        let doc = Document::load(path).map_err(|e| PdfError::Parse(e.to_string()))?;
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!("opened {} ({} pages)", path.display(), pages.len());
        Ok(Box::new(LopdfDocument { doc, pages }))
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, PdfError> {
        let number = self
            .pages
            .get(index)
            .copied()
            .ok_or(PdfError::PageOutOfRange(index))?;
        self.doc
            .extract_text(&[number])
            .map_err(|e| PdfError::Extraction(e.to_string()))
    }
}

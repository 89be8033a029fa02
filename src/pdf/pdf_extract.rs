use std::fs;
use std::path::Path;

use super::{PdfBackend, PdfDocument, PdfError};

/// Backend built on the pdf-extract crate.
///
/// pdf-extract has no page addressing, so the whole document is exposed as a
/// single page of text.
pub struct PdfExtractBackend;

struct FlatDocument {
    text: String,
}

impl PdfBackend for PdfExtractBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError> {
        let bytes = fs::read(path)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| PdfError::Extraction(e.to_string()))?;
        Ok(Box::new(FlatDocument { text }))
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}

impl PdfDocument for FlatDocument {
    fn page_count(&self) -> usize {
        1
    }

    fn page_text(&self, index: usize) -> Result<String, PdfError> {
        if index != 0 {
            return Err(PdfError::PageOutOfRange(index));
        }
        Ok(self.text.clone())
    }
}

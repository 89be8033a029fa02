mod lopdf;
mod pdf_extract;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::cli::PdfBackendKind;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("text extraction error: {0}")]
    Extraction(String),

    #[error("page {0} out of range")]
    PageOutOfRange(usize),
}

/// Trait for PDF parsing backends
pub trait PdfBackend: Send + Sync {
    /// Open a document at the given path
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError>;

    /// Get the backend name
    fn name(&self) -> &'static str;
}

/// An opened document exposing an ordered sequence of pages
pub trait PdfDocument: Send {
    fn page_count(&self) -> usize;

    /// Extract plain text from one page; best-effort, empty when the page has none
    fn page_text(&self, index: usize) -> Result<String, PdfError>;
}

/// Create a backend for the specified kind
pub fn backend_for(kind: PdfBackendKind) -> Arc<dyn PdfBackend> {
    match kind {
        PdfBackendKind::Lopdf => Arc::new(lopdf::LopdfBackend),
        PdfBackendKind::PdfExtract => Arc::new(pdf_extract::PdfExtractBackend),
    }
}

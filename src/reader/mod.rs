mod normalize;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::pdf::PdfBackend;

pub use normalize::collapse_blank_lines;

/// Outcome of reading a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Concatenated, normalized page text in document order
    Report(String),
    NotFound,
    ExtractionError(String),
}

impl fmt::Display for ReadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadOutcome::Report(text) => f.write_str(text),
            ReadOutcome::NotFound => f.write_str("File not found."),
            ReadOutcome::ExtractionError(msg) => write!(f, "Error reading PDF: {}", msg),
        }
    }
}

/// Reads a PDF document into a plain-text report
pub struct DocumentReader {
    backend: Arc<dyn PdfBackend>,
}

impl DocumentReader {
    pub fn new(backend: Arc<dyn PdfBackend>) -> Self {
        Self { backend }
    }

    /// Read the document at `path` into a typed outcome.
    ///
    /// Parsing runs on a blocking worker so callers on the async runtime are
    /// not stalled by file I/O. A panicking backend surfaces as an
    /// extraction error rather than unwinding into the caller.
    pub async fn read_report(&self, path: &Path) -> ReadOutcome {
        let backend = Arc::clone(&self.backend);
        let path = path.to_path_buf();
        match tokio::task::spawn_blocking(move || read_blocking(backend.as_ref(), &path)).await {
            Ok(outcome) => outcome,
            Err(join_error) => ReadOutcome::ExtractionError(join_error.to_string()),
        }
    }

    /// Read the document at `path`, rendering every outcome as a string
    pub async fn read_data(&self, path: &Path) -> String {
        self.read_report(path).await.to_string()
    }
}

fn read_blocking(backend: &dyn PdfBackend, path: &Path) -> ReadOutcome {
    if !path.exists() {
        return ReadOutcome::NotFound;
    }

    debug!("reading {} with {}", path.display(), backend.name());

    let document = match backend.open(path) {
        Ok(document) => document,
        Err(e) => return ReadOutcome::ExtractionError(e.to_string()),
    };

    let mut report = String::new();
    for index in 0..document.page_count() {
        match document.page_text(index) {
            Ok(text) => {
                report.push_str(&collapse_blank_lines(&text));
                report.push('\n');
            }
            // No partial reports: a mid-stream failure fails the whole read
            Err(e) => return ReadOutcome::ExtractionError(e.to_string()),
        }
    }

    ReadOutcome::Report(report)
}

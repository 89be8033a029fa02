pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "findoc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Financial document report extraction CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the plain-text report from a PDF document
    #[command(long_about = "Extract the plain-text report from a PDF document.\n\n\
        Pages are read in document order; blank lines inside each page are\n\
        collapsed and every page contributes one newline-terminated segment.\n\n\
        A missing file prints 'File not found.' and an unreadable document\n\
        prints 'Error reading PDF: <message>'. Both are reported on stdout\n\
        (exit code 0) so scripted callers can treat the output as the result.")]
    Read {
        /// Path to the PDF document (defaults to the configured document, then data/sample.pdf)
        path: Option<PathBuf>,

        /// PDF parsing backend (lopdf is page-aware, pdf-extract reads the whole document at once)
        #[arg(short, long, env = "FINDOC_BACKEND")]
        backend: Option<PdfBackendKind>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the outcome as a JSON envelope instead of plain text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PdfBackendKind {
    #[default]
    Lopdf,
    PdfExtract,
}

impl std::fmt::Display for PdfBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfBackendKind::Lopdf => write!(f, "lopdf"),
            PdfBackendKind::PdfExtract => write!(f, "pdf-extract"),
        }
    }
}

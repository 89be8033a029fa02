use anyhow::{Context, Result};
use console::{Emoji, style};
use std::fs;
use std::path::PathBuf;

use crate::cli::PdfBackendKind;
use crate::config::Config;
use crate::pdf;
use crate::reader::{DocumentReader, ReadOutcome};

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");

pub async fn run(
    path: Option<PathBuf>,
    backend: Option<PdfBackendKind>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;

    let path = path.unwrap_or_else(|| config.default_document.clone());
    let backend = backend.unwrap_or(match config.backend.as_str() {
        "pdf-extract" => PdfBackendKind::PdfExtract,
        _ => PdfBackendKind::Lopdf,
    });

    let reader = DocumentReader::new(pdf::backend_for(backend));

    let rendered = if json {
        let outcome = reader.read_report(&path).await;
        serde_json::to_string(&json_envelope(&outcome))?
    } else {
        reader.read_data(&path).await
    };

    match output {
        Some(output_path) => {
            fs::write(&output_path, &rendered)
                .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
            println!(
                "{}Report for {} written to {}",
                CHECK,
                style(path.display()).cyan(),
                style(output_path.display()).cyan()
            );
        }
        None => {
            // The report carries its own page newlines; everything else gets one
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

fn json_envelope(outcome: &ReadOutcome) -> serde_json::Value {
    match outcome {
        ReadOutcome::Report(text) => serde_json::json!({
            "status": "ok",
            "text": text,
        }),
        ReadOutcome::NotFound => serde_json::json!({
            "status": "not_found",
            "message": "File not found.",
        }),
        ReadOutcome::ExtractionError(message) => serde_json::json!({
            "status": "error",
            "message": message,
        }),
    }
}

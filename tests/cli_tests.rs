//! End-to-end CLI tests using `assert_cmd`.
//!
//! These tests invoke the actual compiled binary and verify exit codes
//! and output. The PDF fixtures are generated on the fly with lopdf, so
//! no checked-in binary assets are needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("findoc").unwrap();
    cmd.env_remove("FINDOC_BACKEND");
    cmd
}

/// Write a two-page PDF whose pages read "Alpha Report" and "Beta Numbers"
fn sample_pdf(dir: &Path) -> PathBuf {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in ["Alpha Report", "Beta Numbers"] {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join("report.pdf");
    doc.save(&path).unwrap();
    path
}

// ─── Help / version ─────────────────────────────────────────────────────

#[test]
fn test_help_shows_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_shows_name() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("findoc"));
}

// ─── Read subcommand argument validation ────────────────────────────────

#[test]
fn test_read_help() {
    cmd()
        .args(["read", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_read_rejects_invalid_backend() {
    cmd()
        .args(["read", "/tmp/x.pdf", "--backend", "mupdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─── Reported outcomes (exit 0, message on stdout) ──────────────────────

#[test]
fn test_read_missing_file_reports_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");
    cmd()
        .args(["read", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."));
}

#[test]
fn test_read_missing_file_json_envelope() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");
    cmd()
        .args(["read", missing.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"not_found\""));
}

#[test]
fn test_read_garbage_file_reports_extraction_error() {
    let dir = tempdir().unwrap();
    let garbage = dir.path().join("garbage.pdf");
    fs::write(&garbage, "this is not a pdf at all").unwrap();
    cmd()
        .args(["read", garbage.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error reading PDF: "));
}

// ─── Reading a real document ────────────────────────────────────────────

#[test]
fn test_read_extracts_pages_in_order() {
    let dir = tempdir().unwrap();
    let pdf = sample_pdf(dir.path());

    let assert = cmd()
        .args(["read", pdf.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let alpha = stdout.find("Alpha Report").expect("page 1 text missing");
    let beta = stdout.find("Beta Numbers").expect("page 2 text missing");
    assert!(alpha < beta, "pages out of order: {:?}", stdout);
}

#[test]
fn test_read_json_envelope_on_success() {
    let dir = tempdir().unwrap();
    let pdf = sample_pdf(dir.path());

    cmd()
        .args(["read", pdf.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"ok\""))
        .stdout(predicate::str::contains("Alpha Report"));
}

#[test]
fn test_read_writes_report_to_output_file() {
    let dir = tempdir().unwrap();
    let pdf = sample_pdf(dir.path());
    let out = dir.path().join("report.txt");

    cmd()
        .args([
            "read",
            pdf.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("written to"));

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("Alpha Report"));
    assert!(report.contains("Beta Numbers"));
}

// ─── Init subcommand ────────────────────────────────────────────────────

#[test]
fn test_init_help() {
    cmd()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

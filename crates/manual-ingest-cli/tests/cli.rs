use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MANUAL: &str = "\
# [Qterw-E-63] 안녕 교통정보 매뉴얼
## [1. 개요]
심야 라디오 방송.
## [3. 탐사 가이드]
- 3-1. 주파수:
  : FM 87.3MHz
";

/// Runs the binary inside `dir`, with `dir` as HOME so no user config is read.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_manual-ingest"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_source_exits_with_error() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["nowhere.md"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere.md not found."));
    assert!(!dir.path().join("public/data/manuals.json").exists());
}

#[test]
fn default_source_path_is_used_without_arguments() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("manuals/extracted/extracted_manual.md");
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, MANUAL).unwrap();

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert!(dir.path().join("public/data/manuals.json").exists());
}

#[test]
fn parses_and_merges_into_store() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("export.md"), MANUAL).unwrap();

    let first = run(dir.path(), &["export.md"]);
    let second = run(dir.path(), &["export.md"]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(String::from_utf8_lossy(&second.stdout).trim(), "Done.");

    let stored = fs::read_to_string(dir.path().join("public/data/manuals.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["id"], "Qterw-E-63");
    assert_eq!(records[0]["explorationGuide"][0]["content"], "FM 87.3MHz");
}

#[test]
fn unrecognized_header_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("export.md"), "# Meeting notes\n").unwrap();

    let output = run(dir.path(), &["export.md"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("public/data/manuals.json").exists());
}

#[test]
fn too_many_arguments_print_usage() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["a.md", "b.md"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

fn write_archive(path: &Path, members: &[(&str, &str)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut zip = zip::ZipWriter::new(fs::File::create(path).unwrap());
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for (name, content) in members {
        zip.start_file(*name, options).unwrap();
        std::io::Write::write_all(&mut zip, content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn extract_flag_unpacks_export_before_parsing() {
    let dir = TempDir::new().unwrap();
    write_archive(
        &dir.path().join("manuals/extracted/Export-5f2c.zip"),
        &[("Export-5f2c/안녕 교통정보 9a1b.md", MANUAL)],
    );

    let output = run(dir.path(), &["--extract"]);

    assert!(output.status.success());
    let extracted = dir.path().join("manuals/extracted/extracted_manual.md");
    assert_eq!(fs::read_to_string(extracted).unwrap(), MANUAL);

    let stored = fs::read_to_string(dir.path().join("public/data/manuals.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(records[0]["id"], "Qterw-E-63");
}

#[test]
fn extract_flag_with_explicit_path_uses_its_directory() {
    let dir = TempDir::new().unwrap();
    write_archive(&dir.path().join("export.zip"), &[("page.md", MANUAL)]);

    let output = run(dir.path(), &["--extract", "page.md"]);

    assert!(output.status.success());
    assert!(dir.path().join("page.md").exists());
}

#[test]
fn extract_flag_without_archive_exits_with_error() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--extract"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Export zip not found"));
    assert!(!dir.path().join("public/data/manuals.json").exists());
}

#[test]
fn extract_flag_without_markdown_member_exits_with_error() {
    let dir = TempDir::new().unwrap();
    write_archive(
        &dir.path().join("manuals/extracted/export.zip"),
        &[("image.png", "png")],
    );

    let output = run(dir.path(), &["--extract"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No markdown file found"));
    assert!(!dir.path().join("public/data/manuals.json").exists());
}

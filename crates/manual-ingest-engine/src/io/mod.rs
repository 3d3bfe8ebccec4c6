use std::fs;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

/// File name the export archive's markdown member is unpacked to.
pub const EXTRACTED_FILE_NAME: &str = "extracted_manual.md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{} not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Export zip not found in {}", .0.display())]
    NoArchive(PathBuf),
    #[error("No markdown file found in {}", .0.display())]
    NoMarkdownMember(PathBuf),
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read an exported manual and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    // Exports saved by some editors start with a byte order mark.
    if let Some(rest) = content.strip_prefix('\u{feff}') {
        return Ok(rest.to_string());
    }
    Ok(content)
}

/// Unpack the first markdown member of the export archive found in `dir`
/// to `target`.
///
/// Archives are the `*.zip` files directly inside `dir`; the first by file
/// name is used. Returns the path of that archive.
pub fn extract_export(dir: &Path, target: &Path) -> Result<PathBuf, IoError> {
    let archive_path = find_archive(dir)?.ok_or_else(|| IoError::NoArchive(dir.to_path_buf()))?;
    log::info!("Extracting export archive: {}", archive_path.display());

    let mut archive = ZipArchive::new(fs::File::open(&archive_path)?)?;
    for index in 0..archive.len() {
        let mut member = archive.by_index(index)?;
        if !member.is_file() || !member.name().ends_with(".md") {
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(target)?;
        std::io::copy(&mut member, &mut out)?;
        log::info!("Extracted {} to {}", member.name(), target.display());
        return Ok(archive_path);
    }

    Err(IoError::NoMarkdownMember(archive_path))
}

fn find_archive(dir: &Path) -> Result<Option<PathBuf>, IoError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut archives = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "zip") {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives.into_iter().next())
}

use crate::models::Document;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("File contains non-UTF-8 characters and must be converted: {0}")]
    InvalidUtf8(PathBuf),
}

/// Index and table-of-contents files are navigation, not articles.
const SKIPPED_FILES: [&str; 3] = ["toc.md", "index.md", "index.experimental.md"];

/// Read a markdown file below `root` into a [`Document`].
///
/// Non-UTF-8 content is decoded lossily with a warning, or rejected when
/// `strict` is set.
pub fn read_document(path: &Path, root: &Path, strict: bool) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) if strict => return Err(IoError::InvalidUtf8(path.to_path_buf())),
        Err(err) => {
            log::warn!(
                "File contains non-UTF-8 characters; decoding lossily: {}",
                path.display()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative_path = RelativePathBuf::from_path(relative)
        .unwrap_or_else(|_| RelativePathBuf::from(relative.to_string_lossy().as_ref()));

    Ok(Document::new(path.to_path_buf(), relative_path, &text))
}

/// Scan for markdown articles below `root`.
///
/// Directories named in `exclude_folders` are pruned wherever they occur, and
/// index/TOC files are skipped. The result is sorted.
pub fn scan_markdown_files(root: &Path, exclude_folders: &[String]) -> Result<Vec<PathBuf>, IoError> {
    walk_markdown(root, exclude_folders, true)
}

/// Like [`scan_markdown_files`], but keeps index and TOC files.
pub fn scan_all_markdown_files(
    root: &Path,
    exclude_folders: &[String],
) -> Result<Vec<PathBuf>, IoError> {
    walk_markdown(root, exclude_folders, false)
}

fn walk_markdown(
    root: &Path,
    exclude_folders: &[String],
    skip_navigation: bool,
) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, exclude_folders, skip_navigation, &mut files)?;
    files.sort();
    Ok(files)
}

/// Symlinked directories are never entered, so a link back up the tree cannot
/// loop. Symlinked files are still read.
fn scan_directory_recursive(
    dir: &Path,
    exclude_folders: &[String],
    skip_navigation: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let file_type = entry.file_type().map_err(IoError::Io)?;
        let path = entry.path();

        if file_type.is_dir() {
            let excluded = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| exclude_folders.iter().any(|e| e == n));
            if excluded {
                log::debug!("Skipping excluded folder {}", path.display());
                continue;
            }
            scan_directory_recursive(&path, exclude_folders, skip_navigation, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            log::debug!("Not following symlinked folder {}", path.display());
        } else if is_markdown(&path) && !(skip_navigation && is_navigation(&path)) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

fn is_navigation(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| SKIPPED_FILES.iter().any(|skip| name.eq_ignore_ascii_case(skip)))
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

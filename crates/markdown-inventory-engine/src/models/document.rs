use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use xi_rope::Rope;

use crate::parsing::{
    rope::{LineRef, lines_with_spans},
    segments::{Segments, segment_document},
};

/// One Markdown article, immutable once read.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    relative_path: RelativePathBuf,
    rope: Rope,
}

impl Document {
    /// Creates a document from already-decoded text.
    pub fn new(path: PathBuf, relative_path: RelativePathBuf, text: &str) -> Self {
        Self {
            path,
            relative_path,
            rope: Rope::from(text),
        }
    }

    /// Creates a document whose relative path is the given path string.
    pub fn from_relative_str(path: &str, text: &str) -> Self {
        Self::new(PathBuf::from(path), RelativePathBuf::from(path), text)
    }

    /// Path as found on disk; used in diagnostics and output rows.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the content set root.
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Bare file name, e.g. `overview.md`.
    pub fn file_name(&self) -> &str {
        self.relative_path.file_name().unwrap_or("")
    }

    /// File name without the `.md` extension.
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// Published URL: the base URL joined with the relative path minus `.md`.
    pub fn url(&self, base_url: &str) -> String {
        let path = self.relative_path.as_str();
        let path = path.strip_suffix(".md").unwrap_or(path);
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }

    /// Numbered lines in document order.
    pub fn lines(&self) -> Vec<LineRef> {
        lines_with_spans(&self.rope).collect()
    }

    /// Runs the segmentation pass; must complete before any classification.
    pub fn segments(&self) -> Segments {
        segment_document(&self.rope, &self.path)
    }
}

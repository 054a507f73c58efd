use std::fmt;

use serde::Serialize;

/// An inclusive, 1-based range of line numbers.
///
/// A range whose `start` is past its `end` is empty (an H1 directly followed by
/// a subheading yields one) and contains no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Boundary-inclusive membership test.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// The inner lines of a fenced code block plus the language from its opening fence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockRange {
    pub lines: LineRange,
    pub language: Option<String>,
}

/// A structural irregularity noticed during segmentation. None of these stop
/// the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// A metadata delimiter carried a byte-order mark.
    ByteOrderMark { line: usize },
    UnclosedMetadata { start: usize },
    SubheadingBeforeH1 { line: usize },
    AdditionalH1 { line: usize },
    /// An H3 or deeper closed the intro.
    DeepSubheadingAfterH1 { line: usize, level: u8 },
    MissingH1,
    /// `start` is the first line inside the fence.
    UnclosedFence { start: usize },
}

impl Anomaly {
    /// Unclosed fences are dropped silently; everything else is worth a warning.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Anomaly::UnclosedFence { .. })
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::ByteOrderMark { line } => {
                write!(f, "Byte-order mark on line {line}; file is not plain UTF-8")
            }
            Anomaly::UnclosedMetadata { start } => {
                write!(f, "Metadata header opened on line {start} is never closed")
            }
            Anomaly::SubheadingBeforeH1 { line } => write!(
                f,
                "Subheading on line {line} appears before any H1; treating it as the H1"
            ),
            Anomaly::AdditionalH1 { line } => write!(f, "Additional H1 on line {line}"),
            Anomaly::DeepSubheadingAfterH1 { line, level } => {
                write!(f, "H{level} on line {line} directly follows the H1")
            }
            Anomaly::MissingH1 => write!(f, "Document has no H1 heading"),
            Anomaly::UnclosedFence { start } => write!(
                f,
                "Code fence opened before line {start} is never closed; dropping it"
            ),
        }
    }
}

/// Structural segments of one document, produced by a single forward pass.
///
/// Each list is in document order and never overlapping. `intro` and
/// `metadata` hold at most one range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segments {
    pub code_blocks: Vec<CodeBlockRange>,
    pub intro: Vec<LineRange>,
    pub metadata: Vec<LineRange>,
    /// Irregularities in the order they were noticed.
    pub anomalies: Vec<Anomaly>,
}

impl Segments {
    pub fn in_code_block(&self, line: usize) -> bool {
        self.code_blocks.iter().any(|b| b.lines.contains(line))
    }

    /// Only the first metadata range is consulted.
    pub fn in_metadata(&self, line: usize) -> bool {
        self.metadata.first().is_some_and(|r| r.contains(line))
    }

    pub fn in_intro(&self, line: usize) -> bool {
        self.intro.iter().any(|r| r.contains(line))
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

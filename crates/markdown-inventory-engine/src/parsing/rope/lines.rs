use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The raw line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line text with any trailing `\r\n` / `\n` removed.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over numbered lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so spans stay contiguous;
/// match offsets from the scanner are mapped back onto these spans.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Finds the line containing byte `offset`, given lines in document order.
///
/// An offset equal to the rope length resolves to the last line.
pub fn line_at(lines: &[LineRef], offset: usize) -> Option<&LineRef> {
    let idx = lines.partition_point(|l| l.span.end <= offset);
    lines.get(idx).or_else(|| lines.last())
}

//! # Document Segmentation
//!
//! One forward pass over a document that records the line ranges the
//! occurrence classifier needs to resolve ambiguous lines.
//!
//! ## Phases
//!
//! 1. **Line classification** (`line_class`): each line gets its local facts
//!    (metadata delimiter, code fence, heading) independently.
//! 2. **Reduction** (`builder`): a `SegmentBuilder` state machine turns the
//!    facts into code-block, intro and metadata ranges.
//!
//! ## Key Invariants
//!
//! - Metadata is only recognised when line 1 is a `---` delimiter, and only the
//!   first pair of delimiters counts.
//! - Fences are checked before headings; lines inside a fence are never
//!   headings.
//! - An unterminated fence contributes no range.
//! - At most one intro range: the lines strictly between the first H1 and the
//!   next subheading, or up to the last line if no subheading follows.

pub mod builder;
pub mod kinds;
pub mod line_class;
pub mod types;

use std::path::Path;

use xi_rope::Rope;

pub use builder::SegmentBuilder;
pub use line_class::LineClass;
pub use types::{Anomaly, CodeBlockRange, LineRange, Segments};

use crate::parsing::rope::lines_with_spans;

/// Segments a document. `path` is only used in diagnostics.
pub fn segment_document(rope: &Rope, path: &Path) -> Segments {
    let mut builder = SegmentBuilder::new(path);
    for lr in lines_with_spans(rope) {
        builder.push(&LineClass::of(&lr));
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn segment(md: &str) -> Segments {
        segment_document(&Rope::from(md), Path::new("test.md"))
    }

    fn block(start: usize, end: usize, language: Option<&str>) -> CodeBlockRange {
        CodeBlockRange {
            lines: LineRange::new(start, end),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn full_article() {
        let md = "\
---
title: Azure Functions overview
ms.date: 01/02/2020
---
# Azure Functions

Intro line one.
Intro line two.

## Get started

```python
# not a heading
print('hi')
```
";
        let segments = segment(md);

        assert_eq!(segments.metadata, vec![LineRange::new(2, 3)]);
        assert_eq!(segments.intro, vec![LineRange::new(6, 9)]);
        assert_eq!(segments.code_blocks, vec![block(13, 14, Some("python"))]);
    }

    #[test]
    fn no_metadata_unless_first_line_is_delimiter() {
        let segments = segment("\n---\ntitle: x\n---\n# H1\n");
        assert!(segments.metadata.is_empty());
    }

    #[test]
    fn later_delimiters_do_not_open_metadata() {
        let segments = segment("---\na: b\n---\n# H1\n---\nc: d\n---\n");
        assert_eq!(segments.metadata, vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn bom_prefixed_delimiter_still_opens_metadata() {
        let segments = segment("\u{feff}---\ntitle: x\n---\n# H1\n");
        assert_eq!(segments.metadata, vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn unclosed_metadata_yields_nothing() {
        let segments = segment("---\ntitle: x\n# H1\n");
        assert!(segments.metadata.is_empty());
        assert!(segments.intro.is_empty());
    }

    #[test]
    fn single_intro_between_h1_and_subheading() {
        let segments = segment("# H1\na\nb\n## Two\nc\n## Three\nd\n");
        assert_eq!(segments.intro, vec![LineRange::new(2, 3)]);
    }

    #[test]
    fn intro_runs_to_end_without_subheading() {
        let segments = segment("# H1\na\nb\nc");
        assert_eq!(segments.intro, vec![LineRange::new(2, 4)]);
    }

    #[test]
    fn subheading_before_h1_opens_intro() {
        let segments = segment("intro-less\n## Section\nbody\n### Deeper\n");
        assert_eq!(segments.intro, vec![LineRange::new(3, 3)]);
    }

    #[test]
    fn second_h1_does_not_reset_intro() {
        let segments = segment("# One\na\n# Two\nb\n## Sub\n");
        assert_eq!(segments.intro, vec![LineRange::new(2, 4)]);
    }

    #[test]
    fn html_subheading_closes_intro() {
        let segments = segment("# One\na\n<h2 id=\"next\">Next</h2>\n");
        assert_eq!(segments.intro, vec![LineRange::new(2, 2)]);
    }

    #[test]
    fn h1_directly_followed_by_subheading_gives_empty_intro() {
        let segments = segment("# One\n## Two\n");
        assert_eq!(segments.intro, vec![LineRange::new(2, 1)]);
        assert!(segments.intro[0].is_empty());
    }

    #[test]
    fn headings_inside_fences_are_ignored() {
        let segments = segment("# One\n```\n## not a heading\n```\nmore\n## Real\n");
        assert_eq!(segments.intro, vec![LineRange::new(2, 5)]);
        assert_eq!(segments.code_blocks, vec![block(3, 3, None)]);
    }

    #[test]
    fn unterminated_fence_is_dropped() {
        let segments = segment("# One\n```js\nconst a = 1;\n");
        assert!(segments.code_blocks.is_empty());
    }

    #[test]
    fn fences_after_intro_are_still_recorded() {
        let md = "# One\nintro\n## Two\n```bash\nls\n```\n> ```\n> quoted\n> ```\n";
        let segments = segment(md);
        assert_eq!(
            segments.code_blocks,
            vec![block(5, 5, Some("bash")), block(8, 8, None)]
        );
    }

    #[test]
    fn no_headings_means_no_intro() {
        let segments = segment("just text\nmore text\n");
        assert!(segments.intro.is_empty());
    }

    #[test]
    fn empty_document() {
        assert_eq!(segment(""), Segments::default());
    }

    #[rstest]
    #[case::bom("\u{feff}---\ntitle: x\n---\n# H1\n", vec![Anomaly::ByteOrderMark { line: 1 }])]
    #[case::unclosed_metadata("---\ntitle: x\n", vec![Anomaly::UnclosedMetadata { start: 1 }])]
    #[case::subheading_first(
        "text\n## Section\nbody\n## Next\n",
        vec![Anomaly::SubheadingBeforeH1 { line: 2 }]
    )]
    #[case::second_h1("# One\na\n# Two\n## Sub\n", vec![Anomaly::AdditionalH1 { line: 3 }])]
    #[case::deep_subheading(
        "# One\na\n### Deep\n",
        vec![Anomaly::DeepSubheadingAfterH1 { line: 3, level: 3 }]
    )]
    #[case::no_h1("just text\n", vec![Anomaly::MissingH1])]
    #[case::unclosed_fence("# One\n```js\nx\n", vec![Anomaly::UnclosedFence { start: 3 }])]
    #[case::clean("---\na: b\n---\n# One\nintro\n## Two\n", vec![])]
    fn records_structural_anomalies(#[case] md: &str, #[case] expected: Vec<Anomaly>) {
        assert_eq!(segment(md).anomalies, expected);
    }

    #[test]
    fn unclosed_fence_is_not_a_warning() {
        assert!(!Anomaly::UnclosedFence { start: 2 }.is_warning());
        assert!(Anomaly::MissingH1.is_warning());
    }

    #[test]
    fn crlf_lines_are_recognised() {
        let segments = segment("---\r\ntitle: x\r\n---\r\n# H1\r\nintro\r\n## Two\r\n");
        assert_eq!(segments.metadata, vec![LineRange::new(2, 2)]);
        assert_eq!(segments.intro, vec![LineRange::new(5, 5)]);
    }
}

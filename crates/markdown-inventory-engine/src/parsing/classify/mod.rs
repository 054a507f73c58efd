//! # Occurrence Classification
//!
//! Decides the structural context of one term occurrence from its line, the
//! end offset of the match within that line and the document's [`Segments`].
//!
//! Classification is a priority-ordered decision list; the first rule that
//! fires wins and the order is part of the contract:
//!
//! 1. `code_fence`: the line is a fence opener naming an allow-listed language
//!    and the term is that language.
//! 2. `code_inline`: an odd number of backticks precede the end of the match.
//! 3. `code_block`: the line lies inside a recorded code block.
//! 4. Preceding markers anywhere before the end of the match, most specific
//!    category first (`link_url`, `alt_text`, `link_text`, `media_url`,
//!    `h1_heading`, `subheading`).
//! 5. Line-start prefixes (`title:`, `# `, `<pre`, ...), tested against the
//!    whole line, so a match that is itself the prefix still takes its tag.
//! 6. `meta_other`: inside the first metadata range.
//! 7. Filename-gated overrides.
//! 8. `text_intro` inside the intro range, otherwise `text`.
//!
//! The classifier holds only immutable configuration and never fails.

pub mod overrides;
pub mod tag;

use std::path::Path;

pub use overrides::{Override, OverrideTable};
pub use tag::{ClassificationTag, TagParseError};

use crate::parsing::segments::Segments;
use ClassificationTag as Tag;

/// A located match, relative to its own line.
#[derive(Debug, Clone, Copy)]
pub struct TermHit<'a> {
    /// The line text without its terminator.
    pub line: &'a str,
    /// Byte offset just past the match within `line`.
    pub term_end: usize,
    /// The matched text.
    pub term: &'a str,
    /// 1-based line number.
    pub line_number: usize,
}

const PRECEDING_MARKERS: [(Tag, &[&str]); 6] = [
    (Tag::LinkUrl, &["](", "][", "href=", "]: "]),
    (Tag::AltText, &["![", "alt="]),
    (Tag::LinkText, &["[", "<a"]),
    (Tag::MediaUrl, &["src=", "<img", "<video"]),
    (Tag::H1Heading, &["<h1"]),
    (Tag::Subheading, &["<h2", "<h3", "<h4", "<h5"]),
];

const LINE_PREFIXES: [(Tag, &[&str]); 8] = [
    (Tag::MetaTitle, &["title:", "TOCTitle:", "PageTitle:"]),
    (Tag::MetaDescription, &["description:", "MetaDescription:"]),
    (Tag::MetaKeywords, &["keywords:"]),
    (Tag::MetaRedirect, &["redirect_url:"]),
    (Tag::H1Heading, &["# "]),
    (Tag::Subheading, &["##"]),
    (Tag::CodeBlock, &["<pre"]),
    (Tag::HtmlMisc, &["<!--", "<div"]),
];

/// Classifies term occurrences using an injected language allow-list and
/// override table.
#[derive(Debug, Clone)]
pub struct OccurrenceClassifier {
    languages: Vec<String>,
    overrides: OverrideTable,
}

impl OccurrenceClassifier {
    /// Fence languages that distinguish a code fence from a prose mention.
    pub const DEFAULT_LANGUAGES: [&'static str; 7] = [
        "python",
        "node",
        "js",
        "javascript",
        "node.js",
        "typescript",
        "java",
    ];

    pub fn new(languages: impl IntoIterator<Item = String>, overrides: OverrideTable) -> Self {
        Self {
            languages: languages.into_iter().map(|l| l.to_lowercase()).collect(),
            overrides,
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Returns exactly one tag for the hit. `filename` may be a full path; only
    /// its last component is used for overrides.
    pub fn classify(&self, hit: &TermHit<'_>, filename: &str, segments: &Segments) -> Tag {
        let end = hit.term_end.min(hit.line.len());
        let before = &hit.line.as_bytes()[..end];

        self.code_fence(hit)
            .or_else(|| code_inline(before))
            .or_else(|| segments.in_code_block(hit.line_number).then_some(Tag::CodeBlock))
            .or_else(|| preceding_marker(before))
            .or_else(|| line_prefix(hit.line.trim_start()))
            .or_else(|| segments.in_metadata(hit.line_number).then_some(Tag::MetaOther))
            .or_else(|| self.filename_override(filename, hit.line.trim_start()))
            .unwrap_or(if segments.in_intro(hit.line_number) {
                Tag::TextIntro
            } else {
                Tag::Text
            })
    }

    fn code_fence(&self, hit: &TermHit<'_>) -> Option<Tag> {
        let term = hit.term.to_lowercase();
        if !self.languages.contains(&term) {
            return None;
        }
        hit.line
            .trim()
            .strip_prefix("```")
            .is_some_and(|rest| rest.eq_ignore_ascii_case(hit.term))
            .then_some(Tag::CodeFence)
    }

    fn filename_override(&self, filename: &str, line: &str) -> Option<Tag> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);
        self.overrides.lookup(name, line)
    }
}

impl Default for OccurrenceClassifier {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LANGUAGES.iter().map(|l| l.to_string()),
            OverrideTable::builtin(),
        )
    }
}

fn code_inline(before: &[u8]) -> Option<Tag> {
    let ticks = before.iter().filter(|&&b| b == b'`').count();
    (ticks % 2 == 1).then_some(Tag::CodeInline)
}

fn preceding_marker(before: &[u8]) -> Option<Tag> {
    PRECEDING_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| contains(before, m.as_bytes())))
        .map(|&(tag, _)| tag)
}

fn line_prefix(line: &str) -> Option<Tag> {
    LINE_PREFIXES
        .iter()
        .find(|(_, prefixes)| prefixes.iter().any(|p| line.starts_with(p)))
        .map(|&(tag, _)| tag)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::segments::{CodeBlockRange, LineRange};
    use rstest::rstest;

    fn hit<'a>(line: &'a str, term: &'a str, line_number: usize) -> TermHit<'a> {
        let start = line.find(term).expect("term on line");
        TermHit {
            line,
            term_end: start + term.len(),
            term,
            line_number,
        }
    }

    fn article_segments() -> Segments {
        Segments {
            metadata: vec![LineRange::new(2, 4)],
            intro: vec![LineRange::new(7, 9)],
            code_blocks: vec![CodeBlockRange {
                lines: LineRange::new(12, 14),
                language: Some("python".into()),
            }],
            anomalies: Vec::new(),
        }
    }

    fn classify(line: &str, term: &str, line_number: usize) -> Tag {
        OccurrenceClassifier::default().classify(
            &hit(line, term, line_number),
            "articles/sample.md",
            &article_segments(),
        )
    }

    #[rstest]
    #[case("- See `python` for details", "python", 30, Tag::CodeInline)]
    #[case("```python", "python", 11, Tag::CodeFence)]
    #[case("  ```Python  ", "Python", 11, Tag::CodeFence)]
    #[case("title: Azure Functions overview", "Azure Functions", 2, Tag::MetaTitle)]
    #[case("[Azure Functions](https://example.com)", "Azure Functions", 30, Tag::LinkText)]
    #[case("[docs](https://example.com/python)", "python", 30, Tag::LinkUrl)]
    #[case("[docs][python-ref]", "python", 30, Tag::LinkUrl)]
    #[case("[python-ref]: https://python.org", "python.org", 30, Tag::LinkUrl)]
    #[case("<a href=\"https://python.org\">", "python", 30, Tag::LinkUrl)]
    #[case("![python logo](logo.png)", "python", 30, Tag::AltText)]
    #[case("<img alt=\"python logo\">", "python", 30, Tag::AltText)]
    #[case("<img src=\"python.png\">", "python", 30, Tag::MediaUrl)]
    #[case("<video controls poster=\"python.png\">", "python", 30, Tag::MediaUrl)]
    #[case("<h1>Use python</h1>", "python", 30, Tag::H1Heading)]
    #[case("<h3>Use python</h3>", "python", 30, Tag::Subheading)]
    #[case("description: Learn python", "python", 3, Tag::MetaDescription)]
    #[case("MetaDescription: Learn python", "python", 30, Tag::MetaDescription)]
    #[case("keywords: python, azure", "python", 3, Tag::MetaKeywords)]
    #[case("redirect_url: /python/overview", "python", 3, Tag::MetaRedirect)]
    #[case("TOCTitle: python", "python", 3, Tag::MetaTitle)]
    #[case("title: Azure Functions overview", "title", 2, Tag::MetaTitle)]
    #[case("# Quickstart: python", "python", 6, Tag::H1Heading)]
    #[case("### Install python", "python", 30, Tag::Subheading)]
    #[case("<pre>python -m venv</pre>", "python", 30, Tag::CodeBlock)]
    #[case("<!-- python note -->", "python", 30, Tag::HtmlMisc)]
    #[case("<div class=\"python\">", "python", 30, Tag::HtmlMisc)]
    #[case("ms.custom: python", "python", 4, Tag::MetaOther)]
    #[case("Install python first.", "python", 8, Tag::TextIntro)]
    #[case("Install python first.", "python", 30, Tag::Text)]
    fn decision_list(
        #[case] line: &str,
        #[case] term: &str,
        #[case] line_number: usize,
        #[case] expected: Tag,
    ) {
        assert_eq!(classify(line, term, line_number), expected);
    }

    #[test]
    fn code_block_membership_is_boundary_inclusive() {
        assert_eq!(classify("import python", "python", 12), Tag::CodeBlock);
        assert_eq!(classify("import python", "python", 14), Tag::CodeBlock);
        assert_eq!(classify("import python", "python", 15), Tag::Text);
    }

    #[test]
    fn fence_rule_needs_an_allow_listed_language() {
        // Three backticks before the end offset: odd, so inline code.
        assert_eq!(classify("```bash", "bash", 11), Tag::CodeInline);
    }

    #[test]
    fn fence_rule_needs_term_to_be_last_token() {
        assert_eq!(classify("```python3", "python", 11), Tag::CodeInline);
    }

    #[test]
    fn inline_code_beats_code_block_membership() {
        assert_eq!(classify("x = `python`", "python", 13), Tag::CodeInline);
    }

    #[test]
    fn closed_inline_span_before_term_is_not_inline() {
        assert_eq!(classify("Run `pip` with python", "python", 30), Tag::Text);
    }

    #[test]
    fn preceding_marker_beats_line_start() {
        assert_eq!(
            classify("title: [python](https://python.org)", "python", 2),
            Tag::LinkText
        );
        assert_eq!(
            classify("# See [docs](x) for python", "python", 6),
            Tag::LinkUrl
        );
    }

    #[test]
    fn markers_after_the_term_are_ignored() {
        assert_eq!(classify("python is in [docs](x)", "python", 30), Tag::Text);
    }

    #[test]
    fn marker_priority_ignores_proximity() {
        // `<img` is closer to the term but link_text outranks media_url.
        assert_eq!(
            classify("[a] <img title=\"python\">", "python", 30),
            Tag::LinkText
        );
    }

    #[test]
    fn line_start_rule_beats_metadata_range() {
        assert_eq!(classify("title: python", "python", 2), Tag::MetaTitle);
    }

    #[test]
    fn only_first_metadata_range_is_consulted() {
        let mut segments = article_segments();
        segments.metadata.push(LineRange::new(40, 45));
        let tag = OccurrenceClassifier::default().classify(
            &hit("ms.topic: python", "python", 41),
            "sample.md",
            &segments,
        );
        assert_eq!(tag, Tag::Text);
    }

    #[test]
    fn filename_overrides_apply_after_generic_rules() {
        let classifier = OccurrenceClassifier::default();
        let segments = article_segments();
        let install = hit("mvn install azure-java", "java", 30);

        assert_eq!(
            classifier.classify(&install, "docs/java-sdk-azure-get-started.md", &segments),
            Tag::CodeBlock
        );
        assert_eq!(
            classifier.classify(&install, "docs/other.md", &segments),
            Tag::Text
        );

        // An earlier rule still wins inside the named file.
        let inline = hit("mvn install `java`", "java", 30);
        assert_eq!(
            classifier.classify(&inline, "java-sdk-azure-get-started.md", &segments),
            Tag::CodeInline
        );
    }

    #[test]
    fn out_of_range_offsets_do_not_panic() {
        let classifier = OccurrenceClassifier::default();
        let wild = TermHit {
            line: "naïve `python",
            term_end: 400,
            term: "python",
            line_number: 1,
        };
        assert_eq!(
            classifier.classify(&wild, "x.md", &Segments::default()),
            Tag::CodeInline
        );

        let mid_char = TermHit {
            line: "naïve python",
            term_end: 3,
            term: "python",
            line_number: 1,
        };
        assert_eq!(
            classifier.classify(&mid_char, "x.md", &Segments::default()),
            Tag::Text
        );
    }

    #[test]
    fn classification_is_pure() {
        let classifier = OccurrenceClassifier::default();
        let segments = article_segments();
        let h = hit("See [python](https://python.org)", "python", 8);
        let first = classifier.classify(&h, "a.md", &segments);
        for _ in 0..3 {
            assert_eq!(classifier.classify(&h, "a.md", &segments), first);
        }
    }

    #[test]
    fn extra_languages_enable_fence_tags() {
        let classifier = OccurrenceClassifier::new(
            ["bash".to_string()],
            OverrideTable::empty(),
        );
        assert_eq!(
            classifier.classify(&hit("```bash", "bash", 1), "x.md", &Segments::default()),
            Tag::CodeFence
        );
    }
}

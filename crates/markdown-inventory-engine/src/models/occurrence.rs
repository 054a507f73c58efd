use serde::{Deserialize, Serialize};

use crate::parsing::classify::ClassificationTag;

use super::Document;

/// A match located in one document and classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMatch {
    /// The search pattern that produced the match.
    pub pattern: String,
    /// The text the pattern matched.
    pub matched: String,
    /// 1-based line number; 0 for a file-name hit.
    pub line: usize,
    /// The full line, terminator removed.
    pub text: String,
    pub tag: ClassificationTag,
}

/// One output row of an inventory run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    pub docset: String,
    pub file: String,
    pub url: String,
    pub term: String,
    pub matched: String,
    pub tag: ClassificationTag,
    pub line: usize,
    pub extract: String,
}

impl OccurrenceRecord {
    pub fn new(docset: &str, doc: &Document, base_url: &str, m: ClassifiedMatch) -> Self {
        Self {
            docset: docset.to_string(),
            file: doc.path().display().to_string(),
            url: doc.url(base_url),
            term: m.pattern,
            matched: m.matched,
            tag: m.tag,
            line: m.line,
            extract: extract(&m.text),
        }
    }
}

/// Trimmed line text without leading list dashes, which spreadsheets read as formulas.
fn extract(line: &str) -> String {
    line.trim().trim_start_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_document_context() {
        let doc = Document::from_relative_str("guides/setup.md", "- Install python\n");
        let m = ClassifiedMatch {
            pattern: "python".into(),
            matched: "python".into(),
            line: 1,
            text: "  - Install python".into(),
            tag: ClassificationTag::Text,
        };

        let record = OccurrenceRecord::new("docs", &doc, "https://example.com", m);

        assert_eq!(record.url, "https://example.com/guides/setup");
        assert_eq!(record.file, "guides/setup.md");
        assert_eq!(record.extract, " Install python");
        assert_eq!(record.tag, ClassificationTag::Text);
    }
}

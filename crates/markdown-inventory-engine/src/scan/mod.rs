//! # Term Scanning
//!
//! Applies an inventory's compiled patterns to a document, maps every match
//! back onto its line and hands it to the [`OccurrenceClassifier`].

use regex::{Regex, RegexBuilder};

use crate::models::{ClassifiedMatch, Document};
use crate::parsing::{
    classify::{ClassificationTag, OccurrenceClassifier, TermHit},
    rope::{full_text, line_at},
    segments::Segments,
};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid pattern {pattern:?} in inventory {inventory}: {source}")]
    InvalidPattern {
        inventory: String,
        pattern: String,
        source: regex::Error,
    },
}

/// A named inventory with its patterns compiled case-insensitive and multi-line.
#[derive(Debug, Clone)]
pub struct TermSet {
    name: String,
    patterns: Vec<Regex>,
}

impl TermSet {
    pub fn compile<S: AsRef<str>>(name: &str, patterns: &[S]) -> Result<Self, ScanError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                    .map_err(|source| ScanError::InvalidPattern {
                        inventory: name.to_string(),
                        pattern: p.as_ref().to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_lowercase(),
            patterns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

/// Finds and classifies every match of `terms` in `doc`.
///
/// `segments` must be the complete segmentation of `doc`. Matches are returned
/// per pattern in document order; a pattern that matches the file stem also
/// yields one [`ClassificationTag::InFilename`] entry on line 0.
pub fn scan_document(
    doc: &Document,
    segments: &Segments,
    terms: &TermSet,
    classifier: &OccurrenceClassifier,
) -> Vec<ClassifiedMatch> {
    let text = full_text(doc.rope());
    let lines = doc.lines();
    let filename = doc.path().to_string_lossy();
    let mut out = Vec::new();

    for pattern in &terms.patterns {
        if let Some(m) = pattern.find(doc.file_stem()) {
            out.push(ClassifiedMatch {
                pattern: pattern.as_str().to_string(),
                matched: m.as_str().to_string(),
                line: 0,
                text: doc.file_name().to_string(),
                tag: ClassificationTag::InFilename,
            });
        }

        for m in pattern.find_iter(&text) {
            let Some(line) = line_at(&lines, m.start()) else {
                continue;
            };
            let content = line.content();
            let hit = TermHit {
                line: content,
                term_end: m.end().saturating_sub(line.span.start).min(content.len()),
                term: m.as_str(),
                line_number: line.number,
            };
            let tag = classifier.classify(&hit, &filename, segments);

            out.push(ClassifiedMatch {
                pattern: pattern.as_str().to_string(),
                matched: m.as_str().to_string(),
                line: line.number,
                text: content.to_string(),
                tag,
            });
        }
    }

    out
}

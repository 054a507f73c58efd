use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::classify::ClassificationTag;

use super::consolidate::ConsolidatedRow;

/// Tags that measure how much prose mentions a term.
pub const TEXT_TAGS: [ClassificationTag; 2] = [ClassificationTag::TextIntro, ClassificationTag::Text];

/// Tags that show a term is prominent in an article.
pub const OCCURRENCE_TAGS: [ClassificationTag; 7] = [
    ClassificationTag::MetaTitle,
    ClassificationTag::MetaDescription,
    ClassificationTag::MetaKeywords,
    ClassificationTag::H1Heading,
    ClassificationTag::Subheading,
    ClassificationTag::CodeFence,
    ClassificationTag::InFilename,
];

/// Relevance score = prose weight (zeroed below the threshold) times prominence weight.
///
/// Tags without a weight count for nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringModel {
    pub text_threshold: u32,
    pub weights: BTreeMap<ClassificationTag, u32>,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            text_threshold: 3,
            weights: TEXT_TAGS
                .iter()
                .chain(OCCURRENCE_TAGS.iter())
                .map(|&t| (t, 1))
                .collect(),
        }
    }
}

impl ScoringModel {
    pub fn score(&self, row: &ConsolidatedRow) -> u64 {
        let text = self.weighted(row, |t| TEXT_TAGS.contains(&t));
        let text = if text >= u64::from(self.text_threshold) {
            text
        } else {
            0
        };
        let occurrence = self.weighted(row, |t| !TEXT_TAGS.contains(&t));
        text * occurrence
    }

    fn weighted(&self, row: &ConsolidatedRow, include: impl Fn(ClassificationTag) -> bool) -> u64 {
        self.weights
            .iter()
            .filter(|&(&tag, _)| include(tag))
            .map(|(&tag, &w)| u64::from(w) * u64::from(row.counts.get(tag)))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRow {
    pub score: u64,
    #[serde(flatten)]
    pub row: ConsolidatedRow,
}

/// Scores rows, drops the uninteresting (zero) ones and sorts best first.
pub fn score_rows(rows: Vec<ConsolidatedRow>, model: &ScoringModel) -> Vec<ScoredRow> {
    let mut scored: Vec<_> = rows
        .into_iter()
        .map(|row| ScoredRow {
            score: model.score(&row),
            row,
        })
        .filter(|s| s.score != 0)
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.row.file.cmp(&b.row.file))
            .then_with(|| a.row.term.cmp(&b.row.term))
    });
    scored
}

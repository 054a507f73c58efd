use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ArticleMetadata, OccurrenceRecord};
use crate::parsing::classify::ClassificationTag;

/// Occurrence count per tag. Every tag is always present, zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCounts(BTreeMap<ClassificationTag, u32>);

impl TagCounts {
    pub fn new() -> Self {
        Self(ClassificationTag::ALL.iter().map(|&t| (t, 0)).collect())
    }

    pub fn increment(&mut self, tag: ClassificationTag) {
        *self.0.entry(tag).or_default() += 1;
    }

    pub fn get(&self, tag: ClassificationTag) -> u32 {
        self.0.get(&tag).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl Default for TagCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// All occurrences of one term in one file, collapsed into tag counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRow {
    pub docset: String,
    pub file: String,
    pub url: String,
    pub term: String,
    pub counts: TagCounts,
    #[serde(default)]
    pub metadata: ArticleMetadata,
}

/// Groups records by (file, term). Output is sorted by file, then term.
pub fn consolidate(records: &[OccurrenceRecord]) -> Vec<ConsolidatedRow> {
    let mut rows: BTreeMap<(&str, &str), ConsolidatedRow> = BTreeMap::new();

    for record in records {
        rows.entry((record.file.as_str(), record.term.as_str()))
            .or_insert_with(|| ConsolidatedRow {
                docset: record.docset.clone(),
                file: record.file.clone(),
                url: record.url.clone(),
                term: record.term.clone(),
                counts: TagCounts::new(),
                metadata: ArticleMetadata::default(),
            })
            .counts
            .increment(record.tag);
    }

    rows.into_values().collect()
}

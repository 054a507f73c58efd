//! # Inventory Runs
//!
//! Walks every content set, segments each article once and scans it for every
//! inventory. Articles are independent, so they are processed in parallel;
//! within one article segmentation always completes before classification.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::io::{self, IoError};
use crate::models::{ArticleMetadata, OccurrenceRecord};
use crate::parsing::classify::OccurrenceClassifier;
use crate::report::{ConsolidatedRow, consolidate};
use crate::scan::{TermSet, scan_document};

/// A folder of articles published under one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSet {
    /// Docset label carried into every output row.
    pub repo: String,
    pub root: PathBuf,
    pub base_url: String,
    pub exclude_folders: Vec<String>,
}

/// Everything one inventory found across all content sets.
#[derive(Debug, Clone, Default)]
pub struct InventoryResult {
    pub name: String,
    /// Sorted by file, then line.
    pub records: Vec<OccurrenceRecord>,
    /// Header fields of every article that produced at least one record.
    pub metadata: BTreeMap<String, ArticleMetadata>,
}

impl InventoryResult {
    /// Consolidated rows with article metadata attached.
    pub fn consolidated(&self) -> Vec<ConsolidatedRow> {
        let mut rows = consolidate(&self.records);
        for row in &mut rows {
            if let Some(meta) = self.metadata.get(&row.file) {
                row.metadata = meta.clone();
            }
        }
        rows
    }
}

struct DocumentFindings {
    file: String,
    metadata: ArticleMetadata,
    per_inventory: Vec<Vec<OccurrenceRecord>>,
}

/// Runs all inventories over all content sets.
///
/// A content set whose root does not exist is skipped with a warning; an
/// unreadable article is skipped with a warning. Errors only surface when a
/// root that exists cannot be walked.
pub fn run_inventory(
    content_sets: &[ContentSet],
    inventories: &[TermSet],
    classifier: &OccurrenceClassifier,
    strict_utf8: bool,
) -> Result<Vec<InventoryResult>, IoError> {
    let mut results: Vec<InventoryResult> = inventories
        .iter()
        .map(|terms| InventoryResult {
            name: terms.name().to_string(),
            ..InventoryResult::default()
        })
        .collect();

    for set in content_sets {
        if let Err(e) = io::validate_content_dir(&set.root) {
            log::warn!("Skipping docset {} at {}: {e}", set.repo, set.root.display());
            continue;
        }
        log::info!("Processing docset {} at {}", set.repo, set.root.display());

        let files = io::scan_markdown_files(&set.root, &set.exclude_folders)?;
        let findings: Vec<DocumentFindings> = files
            .par_iter()
            .filter_map(|path| scan_file(path, set, inventories, classifier, strict_utf8))
            .collect();
        log::info!("Scanned {} files in docset {}", findings.len(), set.repo);

        for doc in findings {
            for (result, records) in results.iter_mut().zip(doc.per_inventory) {
                if records.is_empty() {
                    continue;
                }
                result
                    .metadata
                    .insert(doc.file.clone(), doc.metadata.clone());
                result.records.extend(records);
            }
        }
    }

    for result in &mut results {
        result
            .records
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
    }
    Ok(results)
}

fn scan_file(
    path: &Path,
    set: &ContentSet,
    inventories: &[TermSet],
    classifier: &OccurrenceClassifier,
    strict_utf8: bool,
) -> Option<DocumentFindings> {
    let doc = match io::read_document(path, &set.root, strict_utf8) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Skipping {}: {e}", path.display());
            return None;
        }
    };

    let segments = doc.segments();
    if !segments.has_metadata() {
        log::warn!("File contains no metadata: {}", path.display());
    }

    let per_inventory = inventories
        .iter()
        .map(|terms| {
            scan_document(&doc, &segments, terms, classifier)
                .into_iter()
                .map(|m| OccurrenceRecord::new(&set.repo, &doc, &set.base_url, m))
                .collect()
        })
        .collect();

    Some(DocumentFindings {
        file: doc.path().display().to_string(),
        metadata: ArticleMetadata::extract(&doc, &segments),
        per_inventory,
    })
}

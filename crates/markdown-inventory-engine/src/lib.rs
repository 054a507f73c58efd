pub mod inventory;
pub mod io;
pub mod models;
pub mod parsing;
pub mod report;
pub mod scan;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use inventory::{ContentSet, InventoryResult, run_inventory};
pub use io::*;
pub use models::{ArticleMetadata, ClassifiedMatch, Document, OccurrenceRecord};
pub use parsing::classify::{
    ClassificationTag, OccurrenceClassifier, Override, OverrideTable, TermHit,
};
pub use parsing::segments::{Anomaly, CodeBlockRange, LineRange, Segments, segment_document};
pub use scan::{ScanError, TermSet, scan_document};

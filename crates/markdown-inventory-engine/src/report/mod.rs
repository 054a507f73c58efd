//! Aggregation of classified occurrences: consolidation into per-file tag
//! counts, relevance scoring, and the article-age tally.

pub mod age;
pub mod consolidate;
pub mod score;

pub use age::{AgeError, AgeStats, AgeTally, article_age, render_summary, tally_age};
pub use consolidate::{ConsolidatedRow, TagCounts, consolidate};
pub use score::{ScoredRow, ScoringModel, score_rows};

pub mod document;
pub mod metadata;
pub mod occurrence;

pub use document::Document;
pub use metadata::ArticleMetadata;
pub use occurrence::{ClassifiedMatch, OccurrenceRecord};

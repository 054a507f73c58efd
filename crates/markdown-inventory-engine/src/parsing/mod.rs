//! # Parsing
//!
//! The line-oriented core: a [`rope`] view of the document, the
//! [`segments`] pass that records code-block, intro and metadata ranges, and
//! the [`classify`] decision list that tags each term occurrence using them.

pub mod classify;
pub mod rope;
pub mod segments;

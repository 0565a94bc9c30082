//! lexvec-text
//!
//! Heuristic keyword scoring over document title, content and tags. See
//! `scorer` for the point table.
pub mod scorer;

pub use scorer::LiteralKeywordScorer;

use lexvec_core::traits::KeywordScorer;
use lexvec_core::types::{Document, KeywordHit};

/// Score every document against `query` and keep the best `max_results`.
pub fn keyword_search(query: &str, documents: &[Document], max_results: usize) -> Vec<KeywordHit> {
    LiteralKeywordScorer::new().search(query, documents, max_results)
}

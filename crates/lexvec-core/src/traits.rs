use crate::types::{Document, KeywordHit, ScoredResult, TermVector};

/// Turns text into a sparse term vector.
///
/// The term-frequency implementation never fails; the `Result` leaves room
/// for providers that call out to a model.
pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, text: &str) -> anyhow::Result<TermVector>;
}

pub trait KeywordScorer: Send + Sync {
    fn score(&self, query: &str, doc: &Document) -> f32;
    fn search(&self, query: &str, documents: &[Document], max_results: usize) -> Vec<KeywordHit>;
}

pub trait SearchEngine: Send + Sync {
    fn index(&self, documents: &[Document]) -> anyhow::Result<()>;
    fn query(&self, query: &str, k: usize) -> anyhow::Result<Vec<ScoredResult>>;
}

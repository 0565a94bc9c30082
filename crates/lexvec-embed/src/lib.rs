//! lexvec-embed
//!
//! Term-frequency vectorizer. A token's weight is its count divided by the
//! number of *all* tokens in the text, short ones included, so filler words
//! dilute the weights of the words that are kept.

use anyhow::Result;
use std::collections::BTreeMap;

use lexvec_core::traits::Vectorizer;
use lexvec_core::types::TermVector;

pub mod tokenize;

pub use tokenize::{is_term, tokenize, MIN_TERM_CHARS};

#[derive(Debug, Clone, Copy, Default)]
pub struct TermFrequencyVectorizer;

impl TermFrequencyVectorizer {
    pub fn new() -> Self { Self }

    pub fn vectorize_text(&self, text: &str) -> TermVector {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return TermVector::new();
        }
        let total = tokens.len() as f32;
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for token in tokens.into_iter().filter(|t| is_term(t)) {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts.into_iter().map(|(term, n)| (term, n as f32 / total)).collect()
    }
}

impl Vectorizer for TermFrequencyVectorizer {
    fn vectorize(&self, text: &str) -> Result<TermVector> { Ok(self.vectorize_text(text)) }
}

pub fn get_default_vectorizer() -> Box<dyn Vectorizer> {
    tracing::debug!("using term-frequency vectorizer");
    Box::new(TermFrequencyVectorizer::new())
}

use anyhow::Result;
use parking_lot::RwLock;
use std::collections::HashSet;

use lexvec_core::config::FusionConfig;
use lexvec_core::error::Error;
use lexvec_core::traits::{KeywordScorer, SearchEngine, Vectorizer};
use lexvec_core::types::{DocId, Document, KeywordHit, ScoredResult, VectorHit};
use lexvec_text::LiteralKeywordScorer;
use lexvec_vector::{VectorIndex, VectorTable};

use crate::fusion::fuse;

struct EngineState {
    documents: Vec<Document>,
    index: VectorIndex,
}

impl EngineState {
    fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }
}

/// Owns the corpus and its vector table and answers fused queries.
///
/// Writers (ingestion, edits, deletes) take the lock exclusively; queries
/// share it, so a query always sees a consistent corpus/table pair.
pub struct HybridSearchEngine {
    state: RwLock<EngineState>,
    scorer: LiteralKeywordScorer,
    config: FusionConfig,
}

impl HybridSearchEngine {
    pub fn new(vectorizer: Box<dyn Vectorizer>) -> Self { Self::with_config(vectorizer, FusionConfig::default()) }

    pub fn with_config(vectorizer: Box<dyn Vectorizer>, config: FusionConfig) -> Self {
        Self {
            state: RwLock::new(EngineState { documents: Vec::new(), index: VectorIndex::new(vectorizer) }),
            scorer: LiteralKeywordScorer::new(),
            config,
        }
    }

    pub fn config(&self) -> &FusionConfig { &self.config }

    /// Add a new document and vectorize its title and content.
    pub fn add_document(&self, doc: Document) -> Result<()> {
        let mut state = self.state.write();
        if state.position(&doc.id).is_some() {
            return Err(Error::DuplicateId(doc.id).into());
        }
        state.index.index_text(&doc.id, &doc.vector_text())?;
        tracing::debug!(id = %doc.id, "document added");
        state.documents.push(doc);
        Ok(())
    }

    /// Insert or replace a document in place; returns true if one was replaced.
    pub fn upsert_document(&self, doc: Document) -> Result<bool> {
        let mut state = self.state.write();
        state.index.index_text(&doc.id, &doc.vector_text())?;
        match state.position(&doc.id) {
            Some(pos) => {
                state.documents[pos] = doc;
                Ok(true)
            }
            None => {
                state.documents.push(doc);
                Ok(false)
            }
        }
    }

    /// Remove a document together with its vector.
    pub fn remove_document(&self, id: &str) -> Option<Document> {
        let mut state = self.state.write();
        state.index.remove(id);
        let pos = state.position(id)?;
        tracing::debug!(id, "document removed");
        Some(state.documents.remove(pos))
    }

    /// Re-vectorize every document, replacing the whole table.
    pub fn rebuild(&self) -> Result<usize> {
        let mut state = self.state.write();
        let mut table = VectorTable::new();
        for doc in &state.documents {
            table.insert(doc.id.clone(), state.index.vectorize(&doc.vector_text())?);
        }
        let n = table.len();
        state.index.replace_table(table);
        tracing::info!(vectors = n, "vector table rebuilt");
        Ok(n)
    }

    /// Install a corpus and a previously persisted vector table.
    ///
    /// Documents with a repeated id are dropped (first one wins). Vectors for
    /// ids outside the corpus are discarded; documents without a vector stay
    /// unvectorized until `vectorize_missing` or `rebuild` runs.
    pub fn load(&self, documents: Vec<Document>, mut vectors: VectorTable) {
        let mut seen: HashSet<DocId> = HashSet::with_capacity(documents.len());
        let mut unique = Vec::with_capacity(documents.len());
        for doc in documents {
            if seen.insert(doc.id.clone()) {
                unique.push(doc);
            } else {
                tracing::warn!(id = %doc.id, "duplicate document id in corpus, keeping first");
            }
        }
        let dropped = vectors.retain(|id| seen.contains(id));
        if dropped > 0 {
            tracing::warn!(dropped, "discarded vectors for unknown documents");
        }
        let mut state = self.state.write();
        state.documents = unique;
        state.index.replace_table(vectors);
        tracing::info!(documents = state.documents.len(), vectors = state.index.table().len(), "engine loaded");
    }

    /// Vectorize documents that have no vector table entry.
    pub fn vectorize_missing(&self) -> Result<usize> {
        let mut state = self.state.write();
        let EngineState { documents, index } = &mut *state;
        let missing: Vec<(DocId, String)> = documents
            .iter()
            .filter(|d| !index.table().contains(&d.id))
            .map(|d| (d.id.clone(), d.vector_text()))
            .collect();
        let n = missing.len();
        for (id, text) in missing {
            index.index_text(&id, &text)?;
        }
        if n > 0 {
            tracing::info!(vectorized = n, "vectorized missing documents");
        }
        Ok(n)
    }

    pub fn unvectorized_ids(&self) -> Vec<DocId> {
        let state = self.state.read();
        state.documents.iter().filter(|d| !state.index.table().contains(&d.id)).map(|d| d.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        let state = self.state.read();
        state.position(id).map(|pos| state.documents[pos].clone())
    }

    pub fn documents(&self) -> Vec<Document> { self.state.read().documents.clone() }

    pub fn vector_table(&self) -> VectorTable { self.state.read().index.table().clone() }

    pub fn len(&self) -> usize { self.state.read().documents.len() }

    pub fn is_empty(&self) -> bool { self.state.read().documents.is_empty() }

    pub fn keyword_search(&self, query: &str, max_results: usize) -> Vec<KeywordHit> {
        let state = self.state.read();
        self.scorer.search(query, &state.documents, max_results)
    }

    pub fn vector_search(&self, query: &str, top_k: usize) -> Result<Vec<VectorHit>> {
        let state = self.state.read();
        state.index.search(query, state.documents.iter().map(|d| d.id.as_str()), top_k)
    }

    /// Fused ranking: keyword and vector candidates (each `max_results *
    /// candidate_factor`), merged by id and cut to `max_results`.
    pub fn hybrid_retrieval(&self, query: &str, max_results: usize) -> Result<Vec<ScoredResult>> {
        if max_results == 0 {
            return Ok(Vec::new());
        }
        let candidates = max_results.saturating_mul(self.config.candidate_factor);
        let state = self.state.read();
        let keyword_hits = self.scorer.search(query, &state.documents, candidates);
        let vector_hits = state.index.search(query, state.documents.iter().map(|d| d.id.as_str()), candidates)?;
        tracing::debug!(query, keyword = keyword_hits.len(), vector = vector_hits.len(), "hybrid retrieval");
        Ok(fuse(keyword_hits, vector_hits, &state.documents, &self.config, max_results))
    }
}

impl SearchEngine for HybridSearchEngine {
    fn index(&self, documents: &[Document]) -> Result<()> {
        for doc in documents {
            self.upsert_document(doc.clone())?;
        }
        Ok(())
    }

    fn query(&self, query: &str, k: usize) -> Result<Vec<ScoredResult>> { self.hybrid_retrieval(query, k) }
}

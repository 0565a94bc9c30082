use anyhow::Result;

use lexvec_core::traits::Vectorizer;
use lexvec_core::types::{TermVector, VectorHit};

use crate::similarity::cosine_similarity;
use crate::table::VectorTable;

/// Exact linear-scan similarity index over a `VectorTable`.
pub struct VectorIndex {
    table: VectorTable,
    vectorizer: Box<dyn Vectorizer>,
}

impl VectorIndex {
    pub fn new(vectorizer: Box<dyn Vectorizer>) -> Self {
        Self { table: VectorTable::new(), vectorizer }
    }

    pub fn with_table(vectorizer: Box<dyn Vectorizer>, table: VectorTable) -> Self {
        Self { table, vectorizer }
    }

    pub fn vectorize(&self, text: &str) -> Result<TermVector> { self.vectorizer.vectorize(text) }

    /// Vectorize `text` and store it under `id`, replacing any previous entry.
    pub fn index_text(&mut self, id: &str, text: &str) -> Result<()> {
        let vector = self.vectorizer.vectorize(text)?;
        self.table.insert(id, vector);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<TermVector> { self.table.remove(id) }

    pub fn table(&self) -> &VectorTable { &self.table }

    pub fn replace_table(&mut self, table: VectorTable) -> VectorTable { std::mem::replace(&mut self.table, table) }

    /// Rank `candidate_ids` by cosine similarity to `query`.
    ///
    /// Ids without a table entry are skipped, as are candidates with zero
    /// similarity. Ties keep candidate order.
    pub fn search<I, S>(&self, query: &str, candidate_ids: I, top_k: usize) -> Result<Vec<VectorHit>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if top_k == 0 {
            return Ok(Vec::new());
        }
        let query_vec = self.vectorizer.vectorize(query)?;
        if query_vec.is_empty() {
            return Ok(Vec::new());
        }
        let mut hits: Vec<VectorHit> = candidate_ids
            .into_iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let vector = self.table.get(id)?;
                let similarity = cosine_similarity(&query_vec, vector);
                (similarity > 0.0).then(|| VectorHit { id: id.to_string(), similarity })
            })
            .collect();
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        hits.truncate(top_k);
        tracing::debug!(query, hits = hits.len(), table = self.table.len(), "vector search");
        Ok(hits)
    }
}

//! Score fusion for keyword and vector hits.
//!
//! A document found only by the keyword scorer keeps its raw keyword score as
//! the combined score. A document found only by vector search gets
//! `similarity * vector_weight`. A document found by both gets
//! `keyword * keyword_weight + similarity * vector_weight`. The asymmetry is
//! part of the ranking contract: a strong keyword-only hit can outrank a
//! blended one.

use std::collections::HashMap;

use lexvec_core::config::FusionConfig;
use lexvec_core::types::{Document, KeywordHit, ScoredResult, SourceKind, VectorHit};

/// Merge both hit lists by document id and return the best `max_results`.
///
/// `documents` resolves ids of vector-only hits; ids it does not contain are
/// dropped. Equal combined scores keep merge order: keyword hits first in
/// their ranked order, then vector-only hits in theirs.
pub fn fuse(
    keyword_hits: Vec<KeywordHit>,
    vector_hits: Vec<VectorHit>,
    documents: &[Document],
    config: &FusionConfig,
    max_results: usize,
) -> Vec<ScoredResult> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut merged: Vec<ScoredResult> = Vec::with_capacity(keyword_hits.len() + vector_hits.len());
    let mut slot_by_id: HashMap<String, usize> = HashMap::new();

    for hit in keyword_hits {
        if slot_by_id.contains_key(&hit.document.id) {
            continue;
        }
        slot_by_id.insert(hit.document.id.clone(), merged.len());
        merged.push(ScoredResult {
            document: hit.document,
            keyword_score: hit.relevance_score,
            vector_score: 0.0,
            combined_score: hit.relevance_score,
            source: SourceKind::Keyword,
        });
    }

    let mut by_id: Option<HashMap<&str, &Document>> = None;
    for hit in vector_hits {
        if let Some(&slot) = slot_by_id.get(&hit.id) {
            let r = &mut merged[slot];
            if r.source == SourceKind::Keyword {
                r.vector_score = hit.similarity;
                r.combined_score = r.keyword_score * config.keyword_weight + hit.similarity * config.vector_weight;
                r.source = SourceKind::Hybrid;
            }
            continue;
        }
        let lookup = by_id.get_or_insert_with(|| documents.iter().map(|d| (d.id.as_str(), d)).collect());
        let Some(doc) = lookup.get(hit.id.as_str()) else {
            tracing::debug!(id = %hit.id, "vector hit without a corpus document, skipped");
            continue;
        };
        slot_by_id.insert(hit.id.clone(), merged.len());
        merged.push(ScoredResult {
            document: (*doc).clone(),
            keyword_score: 0.0,
            vector_score: hit.similarity,
            combined_score: hit.similarity * config.vector_weight,
            source: SourceKind::Vector,
        });
    }

    merged.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    merged.truncate(max_results);
    merged
}

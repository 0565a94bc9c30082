use lexvec_core::traits::KeywordScorer;
use lexvec_core::types::{Document, KeywordHit};

pub const TITLE_PHRASE_POINTS: f32 = 5.0;
pub const CONTENT_PHRASE_POINTS: f32 = 3.0;
pub const TAG_PHRASE_POINTS: f32 = 2.0;
pub const TITLE_WORD_POINTS: f32 = 2.0;
pub const CONTENT_WORD_POINTS: f32 = 1.0;
/// Query words need more chars than this to be counted individually.
pub const MIN_WORD_CHARS: usize = 2;

/// Literal substring scorer over title, content and tags.
///
/// All comparisons are case-insensitive. The whole query is matched as a
/// phrase against each field, then each query word longer than two chars is
/// counted (non-overlapping) in title and content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralKeywordScorer;

impl LiteralKeywordScorer {
    pub fn new() -> Self { Self }
}

impl KeywordScorer for LiteralKeywordScorer {
    fn score(&self, query: &str, doc: &Document) -> f32 {
        if query.is_empty() {
            return 0.0;
        }
        let query = query.to_lowercase();
        let title = doc.title.to_lowercase();
        let content = doc.content.to_lowercase();

        let mut score = 0.0;
        if title.contains(&query) { score += TITLE_PHRASE_POINTS; }
        if content.contains(&query) { score += CONTENT_PHRASE_POINTS; }
        let matching_tags = doc.tags.iter().filter(|t| t.to_lowercase().contains(&query)).count();
        score += matching_tags as f32 * TAG_PHRASE_POINTS;

        for word in query.split_whitespace().filter(|w| w.chars().count() > MIN_WORD_CHARS) {
            let title_matches = title.matches(word).count();
            let content_matches = content.matches(word).count();
            score += title_matches as f32 * TITLE_WORD_POINTS + content_matches as f32 * CONTENT_WORD_POINTS;
        }
        score
    }

    fn search(&self, query: &str, documents: &[Document], max_results: usize) -> Vec<KeywordHit> {
        if max_results == 0 {
            return Vec::new();
        }
        let mut hits: Vec<KeywordHit> = documents
            .iter()
            .filter_map(|doc| {
                let score = self.score(query, doc);
                (score > 0.0).then(|| KeywordHit { document: doc.clone(), relevance_score: score })
            })
            .collect();
        // stable: equal scores keep corpus order
        hits.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        hits.truncate(max_results);
        tracing::debug!(query, hits = hits.len(), "keyword search");
        hits
    }
}

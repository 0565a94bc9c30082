use lexvec_core::traits::KeywordScorer;
use lexvec_core::types::Document;
use lexvec_text::{keyword_search, LiteralKeywordScorer};

fn corpus() -> Vec<Document> {
    vec![
        Document::new("a", "Alpha Systems", "alpha beta gamma alpha").with_tags(["alpha"]),
        Document::new("b", "Beta Overview", "beta gamma delta").with_tags(["beta"]),
    ]
}

#[test]
fn worked_example_scores_fourteen() {
    let docs = corpus();
    let scorer = LiteralKeywordScorer::new();
    // 5 title phrase + 3 content phrase + 2 tag + 1*2 title word + 2*1 content word
    assert_eq!(scorer.score("alpha", &docs[0]), 14.0);
    assert_eq!(scorer.score("alpha", &docs[1]), 0.0);

    let hits = keyword_search("alpha", &docs, 10);
    assert_eq!(hits.len(), 1, "zero-score documents are excluded");
    assert_eq!(hits[0].document.id, "a");
    assert_eq!(hits[0].relevance_score, 14.0);
}

#[test]
fn matching_ignores_case() {
    let doc = Document::new("x", "GAMMA rays", "Gamma GAMMA gamma").with_tags(["Gamma-Ray"]);
    // 5 + 3 + 2 + 1*2 + 3*1
    assert_eq!(LiteralKeywordScorer::new().score("GaMmA", &doc), 15.0);
}

#[test]
fn each_matching_tag_adds_two() {
    let doc = Document::new("x", "", "").with_tags(["rust", "rustacean", "go"]);
    // two tags contain "rust"; empty title and content add nothing
    assert_eq!(LiteralKeywordScorer::new().score("rust", &doc), 4.0);
}

#[test]
fn short_query_words_only_count_as_phrase() {
    let doc = Document::new("x", "go to market", "we go on");
    let scorer = LiteralKeywordScorer::new();
    // "go" is a phrase hit in title (5) and content (3); too short for word counts
    assert_eq!(scorer.score("go", &doc), 8.0);
    // multi-word query: no phrase hit, only "market" counts once in title
    assert_eq!(scorer.score("go market", &doc), 2.0);
}

#[test]
fn word_counts_are_non_overlapping_substrings() {
    let doc = Document::new("x", "", "aaaa");
    // "aaa" occurs once without overlap; phrase hit adds 3
    assert_eq!(LiteralKeywordScorer::new().score("aaa", &doc), 4.0);
}

#[test]
fn empty_query_scores_zero_everywhere() {
    let docs = corpus();
    assert!(keyword_search("", &docs, 10).is_empty());
}

#[test]
fn whitespace_query_is_matched_literally() {
    let docs = corpus();
    let scorer = LiteralKeywordScorer::new();
    // " " occurs in both titles and contents; no words to count
    assert_eq!(scorer.score(" ", &docs[0]), 8.0);
    assert_eq!(scorer.score(" ", &docs[1]), 8.0);
    // three spaces occur nowhere
    assert_eq!(scorer.score("   ", &docs[0]), 0.0);
    assert!(keyword_search("   ", &docs, 10).is_empty());

    let ids: Vec<String> = keyword_search(" ", &docs, 10).into_iter().map(|h| h.document.id).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn results_sorted_descending_and_truncated() {
    let docs = vec![
        Document::new("1", "", "beta"),
        Document::new("2", "beta", "beta"),
        Document::new("3", "", "beta beta"),
    ];
    let hits = keyword_search("beta", &docs, 2);
    let ids: Vec<&str> = hits.iter().map(|h| h.document.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert!(hits[0].relevance_score >= hits[1].relevance_score);
}

#[test]
fn ties_preserve_corpus_order() {
    let docs = vec![
        Document::new("z", "", "delta"),
        Document::new("m", "", "delta"),
        Document::new("a", "", "delta"),
    ];
    let ids: Vec<String> = keyword_search("delta", &docs, 10).into_iter().map(|h| h.document.id).collect();
    assert_eq!(ids, vec!["z", "m", "a"]);
}

#[test]
fn zero_max_results_returns_nothing() {
    assert!(keyword_search("alpha", &corpus(), 0).is_empty());
}

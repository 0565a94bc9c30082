use std::collections::HashSet;

use lexvec_core::config::FusionConfig;
use lexvec_core::types::{Document, KeywordHit, SourceKind, VectorHit};
use lexvec_hybrid::fuse;

fn doc(id: &str) -> Document { Document::new(id, format!("title {id}"), format!("content {id}")) }

fn kw(id: &str, score: f32) -> KeywordHit { KeywordHit { document: doc(id), relevance_score: score } }

fn vh(id: &str, similarity: f32) -> VectorHit { VectorHit { id: id.to_string(), similarity } }

fn approx(a: f32, b: f32) -> bool { (a - b).abs() < 1e-5 }

#[test]
fn combined_score_depends_on_which_scorers_matched() {
    let corpus = vec![doc("both"), doc("kw"), doc("vec")];
    let results = fuse(
        vec![kw("both", 10.0), kw("kw", 2.0)],
        vec![vh("both", 0.5), vh("vec", 0.9)],
        &corpus,
        &FusionConfig::default(),
        10,
    );
    let get = |id: &str| results.iter().find(|r| r.document.id == id).expect(id);

    let both = get("both");
    assert_eq!(both.source, SourceKind::Hybrid);
    assert!(approx(both.combined_score, 10.0 * 0.6 + 0.5 * 0.4));
    assert_eq!(both.keyword_score, 10.0);
    assert_eq!(both.vector_score, 0.5);

    let kw_only = get("kw");
    assert_eq!(kw_only.source, SourceKind::Keyword);
    assert_eq!(kw_only.combined_score, 2.0, "keyword-only keeps the raw score");
    assert_eq!(kw_only.vector_score, 0.0);

    let vec_only = get("vec");
    assert_eq!(vec_only.source, SourceKind::Vector);
    assert!(approx(vec_only.combined_score, 0.9 * 0.4));
    assert_eq!(vec_only.keyword_score, 0.0);
}

#[test]
fn keyword_only_hit_can_outrank_blended_hit() {
    let corpus = vec![doc("blend"), doc("raw")];
    let results = fuse(vec![kw("blend", 4.0), kw("raw", 3.0)], vec![vh("blend", 1.0)], &corpus, &FusionConfig::default(), 10);
    // blend: 4*0.6 + 1*0.4 = 2.8 < 3.0
    assert_eq!(results[0].document.id, "raw");
    assert_eq!(results[1].document.id, "blend");
}

#[test]
fn output_has_unique_ids_sorted_descending() {
    let corpus: Vec<Document> = ["a", "b", "c", "d"].iter().map(|id| doc(id)).collect();
    let results = fuse(
        vec![kw("a", 1.0), kw("b", 6.0), kw("c", 3.0)],
        vec![vh("c", 0.7), vh("d", 0.2), vh("a", 0.1), vh("d", 0.2)],
        &corpus,
        &FusionConfig::default(),
        10,
    );
    let ids: HashSet<&str> = results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids.len(), results.len());
    assert_eq!(results.len(), 4);
    for pair in results.windows(2) {
        assert!(pair[0].combined_score >= pair[1].combined_score);
    }
}

#[test]
fn ties_keep_merge_order() {
    let corpus = vec![doc("k1"), doc("k2"), doc("v1")];
    let results = fuse(vec![kw("k1", 0.4), kw("k2", 0.4)], vec![vh("v1", 1.0)], &corpus, &FusionConfig::default(), 10);
    let ids: Vec<&str> = results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, vec!["k1", "k2", "v1"]);
}

#[test]
fn truncates_to_max_results_and_zero_means_empty() {
    let corpus = vec![doc("a"), doc("b"), doc("c")];
    let hits = || vec![kw("a", 3.0), kw("b", 2.0), kw("c", 1.0)];
    assert_eq!(fuse(hits(), vec![], &corpus, &FusionConfig::default(), 2).len(), 2);
    assert!(fuse(hits(), vec![vh("a", 1.0)], &corpus, &FusionConfig::default(), 0).is_empty());
}

#[test]
fn vector_hits_outside_corpus_are_dropped() {
    let results = fuse(vec![], vec![vh("ghost", 0.9)], &[doc("real")], &FusionConfig::default(), 5);
    assert!(results.is_empty());
}

#[test]
fn custom_weights_apply_to_blend_and_vector_only() {
    let config = FusionConfig { keyword_weight: 0.5, vector_weight: 0.5, candidate_factor: 2 };
    let corpus = vec![doc("a"), doc("b")];
    let results = fuse(vec![kw("a", 2.0)], vec![vh("a", 1.0), vh("b", 0.8)], &corpus, &config, 5);
    assert!(approx(results[0].combined_score, 1.5));
    assert!(approx(results[1].combined_score, 0.4));
}

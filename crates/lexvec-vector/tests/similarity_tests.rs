use lexvec_core::types::TermVector;
use lexvec_embed::TermFrequencyVectorizer;
use lexvec_vector::cosine_similarity;

fn tv(pairs: &[(&str, f32)]) -> TermVector { pairs.iter().copied().collect() }

#[test]
fn self_similarity_is_one() {
    let vz = TermFrequencyVectorizer::new();
    for text in ["alpha", "alpha beta gamma alpha", "the quick brown fox jumps over the lazy dog"] {
        let v = vz.vectorize_text(text);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-5, "text={text}");
    }
}

#[test]
fn disjoint_vectors_score_zero() {
    let a = tv(&[("alpha", 0.5), ("beta", 0.5)]);
    let b = tv(&[("gamma", 1.0)]);
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn empty_vectors_score_zero_without_nan() {
    let empty = TermVector::new();
    let a = tv(&[("alpha", 1.0)]);
    for s in [cosine_similarity(&empty, &empty), cosine_similarity(&empty, &a), cosine_similarity(&a, &empty)] {
        assert_eq!(s, 0.0);
        assert!(!s.is_nan());
    }
}

#[test]
fn norms_cover_all_terms_not_just_shared_ones() {
    let a = tv(&[("alpha", 1.0), ("beta", 1.0)]);
    let b = tv(&[("alpha", 1.0), ("gamma", 1.0)]);
    // dot = 1, norms = sqrt(2) each
    assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-6);
}

#[test]
fn similarity_is_symmetric_and_bounded() {
    let vz = TermFrequencyVectorizer::new();
    let a = vz.vectorize_text("alpha beta gamma alpha");
    let b = vz.vectorize_text("beta gamma delta");
    let ab = cosine_similarity(&a, &b);
    let ba = cosine_similarity(&b, &a);
    assert!((ab - ba).abs() < 1e-6);
    assert!(ab > 0.0 && ab < 1.0);
}

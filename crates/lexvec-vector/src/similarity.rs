use lexvec_core::types::TermVector;

/// Cosine similarity of two sparse vectors.
///
/// Returns 0 when the vectors share no term, which also covers empty inputs.
/// Norms are taken over every term of each vector, not only the shared ones.
/// Weights are non-negative, so the result lies in [0, 1].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0f32;
    let mut overlap = false;
    for (term, w) in small.iter() {
        if let Some(other) = large.get(term) {
            dot += w * other;
            overlap = true;
        }
    }
    if !overlap {
        return 0.0;
    }
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

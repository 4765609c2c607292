//! Cosine similarity over L2-normalized vectors.

/// Scale a vector to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity of two pre-normalized vectors: a plain dot product,
/// clamped to `[-1, 1]`.
///
/// # Panics
/// Panics if the vectors differ in length. That is a wiring defect
/// (two providers mixed in one comparison), not bad input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "cosine similarity over vectors of different dimensions"
    );
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    dot.clamp(-1.0, 1.0)
}

/// Max and mean similarity of one query against a set of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimilarityStats {
    pub max: f64,
    pub mean: f64,
    /// Index of the best-matching candidate, if any.
    pub best: Option<usize>,
}

impl SimilarityStats {
    pub fn compute<V: AsRef<[f32]>>(query: &[f32], candidates: &[V]) -> Self {
        if candidates.is_empty() {
            return Self::default();
        }
        let mut max = f64::NEG_INFINITY;
        let mut best = 0;
        let mut sum = 0.0;
        for (i, c) in candidates.iter().enumerate() {
            let sim = cosine_similarity(query, c.as_ref());
            sum += sim;
            if sim > max {
                max = sim;
                best = i;
            }
        }
        Self {
            max,
            mean: sum / candidates.len() as f64,
            best: Some(best),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_unit_vectors_score_one() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn result_is_clamped() {
        // Not normalized on purpose: the raw dot product is 25.
        let v = vec![3.0, 4.0];
        assert_eq!(cosine_similarity(&v, &v), 1.0);
        let w = vec![-3.0, -4.0];
        assert_eq!(cosine_similarity(&v, &w), -1.0);
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn mismatched_dimensions_panic() {
        cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_vector_stays_zero() {
        let mut v = vec![0.0f32; 4];
        l2_normalize(&mut v);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn stats_track_best_and_mean() {
        let q = vec![1.0, 0.0];
        let candidates = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let stats = SimilarityStats::compute(&q, &candidates);
        assert_eq!(stats.best, Some(1));
        assert!((stats.max - 1.0).abs() < 1e-9);
        assert!((stats.mean - 0.5).abs() < 1e-9);
    }

    #[test]
    fn stats_over_nothing_are_zero() {
        let stats = SimilarityStats::compute::<Vec<f32>>(&[1.0], &[]);
        assert_eq!(stats, SimilarityStats::default());
    }
}

//! Pairwise similarity matrix
//!
//! Computes cosine similarity between every pair of feature rows. The
//! matrix is symmetric; only the upper triangle is computed and the lower
//! triangle is mirrored from it.

use crate::vectorizer::FeatureMatrix;

/// N x N symmetric matrix of cosine scores in [0, 1], row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// Compute all pairwise cosine scores for the given feature matrix
    ///
    /// Deterministic and pure. Rows with zero norm (items without tags)
    /// score 0.0 against every row, themselves included.
    #[must_use]
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let rows = features.rows();
        let n = rows.len();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            for j in i..n {
                let score = rows[i].cosine_similarity(&rows[j]);
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        Self { n, scores }
    }

    /// Number of items (matrix is len x len)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score between items i and j
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "score index out of bounds");
        self.scores[i * self.n + j]
    }

    /// Full score row for item i
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }
}

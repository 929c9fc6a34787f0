//! Top-N recommendation over a prebuilt score matrix
//!
//! The recommender owns the catalog and its derived score matrix, both
//! immutable after construction, so repeated queries share the same
//! read-only state.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::similarity::ScoreMatrix;
use crate::vectorizer::FeatureMatrix;
use std::cmp::Ordering;

/// A ranked recommendation: the item title and its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

/// Ranks catalog items against a query title by tag similarity
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    scores: ScoreMatrix,
}

impl Recommender {
    /// Build the vocabulary, feature matrix and score matrix for a catalog
    ///
    /// Fails with [`Error::EmptyCatalog`] when the catalog has no items.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let features = FeatureMatrix::from_catalog(&catalog)?;
        let scores = ScoreMatrix::from_features(&features);
        Ok(Self { catalog, scores })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// Return the `top_n` items most similar to `title`, best first
    ///
    /// The query item itself is excluded. When fewer than `top_n` other
    /// items exist, all of them are returned. Fails with
    /// [`Error::TitleNotFound`] when no item matches `title` exactly.
    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let query = self
            .catalog
            .index_of(title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

        let mut ranked: Vec<(usize, f64)> = self
            .scores
            .row(query)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(index, _)| index != query)
            .collect();

        // Descending by score; equal scores fall back to ascending catalog
        // index so the ordering never depends on sort stability.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .map(|(index, score)| Recommendation {
                title: self.catalog.items()[index].title.clone(),
                score,
            })
            .collect())
    }
}

//! Tag vectorizer
//!
//! Encodes each item's tag set as a binary row over the global vocabulary
//! of tags observed across the catalog. The vocabulary is sorted
//! lexicographically so the same catalog always yields the same column
//! assignment.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::vector::Vector;
use ahash::AHashMap;

/// Sorted, deduplicated set of all tags in a catalog with stable column indices
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    tags: Vec<String>,
    columns: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the union of all tags across the catalog, sorted lexicographically
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut tags: Vec<String> = catalog
            .items()
            .iter()
            .flat_map(|item| item.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();

        let columns = tags
            .iter()
            .enumerate()
            .map(|(col, tag)| (tag.clone(), col))
            .collect();

        Self { tags, columns }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Column index assigned to a tag, if the tag is in the vocabulary
    #[inline]
    #[must_use]
    pub fn column(&self, tag: &str) -> Option<usize> {
        self.columns.get(tag).copied()
    }
}

/// N x V binary matrix: one row per item, one column per vocabulary tag
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    vocabulary: Vocabulary,
    rows: Vec<Vector>,
}

impl FeatureMatrix {
    /// Vectorize a catalog: build the vocabulary and one binary row per item
    ///
    /// Pure function of the catalog. An item with no tags yields an all-zero
    /// row, which scores 0.0 against everything downstream. Fails on an
    /// empty catalog.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let vocabulary = Vocabulary::from_catalog(catalog);
        let rows = catalog
            .items()
            .iter()
            .map(|item| {
                let mut row = Vector::zeros(vocabulary.len());
                for tag in &item.tags {
                    if let Some(col) = vocabulary.column(tag) {
                        row.as_mut_slice()[col] = 1.0;
                    }
                }
                row
            })
            .collect();

        Ok(Self { vocabulary, rows })
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Number of items (rows)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

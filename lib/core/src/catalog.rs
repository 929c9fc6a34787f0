//! Catalog of items to recommend over
//!
//! A catalog is an ordered sequence of items; the order fixes the row and
//! column order of every matrix derived from it. The catalog is built once
//! and never mutated by the core; any change means rebuilding the derived
//! artifacts from scratch.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A catalog item: a stable id, a display title and its categorical tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub tags: Vec<String>,
}

impl Item {
    pub fn new<T>(id: u32, title: impl Into<String>, tags: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered, immutable sequence of items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a JSON array of items
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<Item> =
            serde_json::from_reader(reader).map_err(|e| Error::Catalog(e.to_string()))?;
        Ok(Self::new(items))
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_reader(json.as_bytes())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Resolve a title to its catalog index by exact match
    ///
    /// Titles are expected to be unique; when two items share a title the
    /// first match wins.
    #[must_use]
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }
}
